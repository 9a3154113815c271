//! End-to-end verification of the translation rules.
//!
//! These tests pin the externally observable mapping: the documented
//! scenarios plus the set-semantics properties of the modifier handling.

#[cfg(test)]
mod scenario_tests {
    use sacman::translator::CommandTranslator;

    fn command(input: &str) -> String {
        CommandTranslator::new().translate(input).command
    }

    #[test]
    fn test_documented_scenarios() {
        assert_eq!(command("sacman -Ql"), "systemctl list-unit-files");
        assert_eq!(command("sacman -Fe nginx.service"), "systemctl edit nginx.service");
        assert_eq!(command("sacman --version"), "systemctl --version");
        assert_eq!(command("sacman -Szy unit"), "systemctl reenable unit");
        assert_eq!(
            command("sacman -Styuq mpris-proxy"),
            "systemctl --user try-restart mpris-proxy"
        );
    }

    #[test]
    fn test_dry_run_flags_are_informational() {
        let translator = CommandTranslator::new();

        let result = translator.translate("sacman -Szy unit");
        assert!(result.engine_dry_run);
        assert!(!result.target_dry_run);

        let result = translator.translate("sacman -SzDy unit");
        assert!(result.engine_dry_run);
        assert!(result.target_dry_run);
        assert_eq!(result.command, "systemctl --dry-run reenable unit");
    }

    #[test]
    fn test_multiple_targets_keep_their_order() {
        assert_eq!(
            command("sacman -Rt nginx.service redis.service postgres.service"),
            "systemctl stop nginx.service redis.service postgres.service"
        );
        let explanation = CommandTranslator::new()
            .translate("sacman -Rt nginx.service redis.service")
            .explanation;
        assert_eq!(explanation, "Stop nginx.service redis.service.");
    }

    #[test]
    fn test_option_token_position_is_irrelevant() {
        assert_eq!(
            command("sacman nginx.service -St"),
            command("sacman -St nginx.service")
        );
        assert_eq!(
            command("sacman --no-pager -Qi nginx"),
            command("sacman -Qi --no-pager nginx")
        );
    }

    #[test]
    fn test_errors_name_the_operation() {
        let translator = CommandTranslator::new();
        for (input, needle) in [
            ("sacman -Z unit", "-Z"),
            ("sacman -W", "-W"),
            ("sacman -Q", "-Q"),
            ("sacman -T x", "-T"),
        ] {
            let error = translator.translate(input).error.expect(input);
            assert!(error.to_string().contains(needle), "{input}: {error}");
        }
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use proptest::sample::subsequence;
    use sacman::translator::CommandTranslator;

    proptest! {
        #[test]
        fn prop_translation_is_idempotent(input in "\\PC{0,60}") {
            let translator = CommandTranslator::new();
            prop_assert_eq!(translator.translate(&input), translator.translate(&input));
        }

        #[test]
        fn prop_modifier_order_is_irrelevant(
            perm in Just(vec!['t', 'y', 'u', 'd', 'q', 'z', 'D']).prop_shuffle()
        ) {
            let translator = CommandTranslator::new();
            let shuffled: String = perm.iter().collect();
            let canonical = translator.translate("sacman -SDdqtuyz unit");
            let result = translator.translate(&format!("sacman -S{shuffled} unit"));
            prop_assert_eq!(result, canonical);
        }

        #[test]
        fn prop_engine_dry_run_leaves_no_trace(
            modifiers in subsequence(
                vec!['u', 'n', 'a', 'r', 'f', 'D', 't', 'y', 'd'],
                0..=9,
            )
        ) {
            let translator = CommandTranslator::new();
            let flags: String = modifiers.iter().collect();

            let with_z = translator.translate(&format!("sacman -S{flags}z demo.service"));
            let without_z = translator.translate(&format!("sacman -S{flags} demo.service"));

            prop_assert!(with_z.engine_dry_run);
            prop_assert!(!without_z.engine_dry_run);
            prop_assert_eq!(&with_z.command, &without_z.command);
            prop_assert!(!with_z.command.contains('z'));

            let dry_runs = with_z.command.matches("--dry-run").count();
            prop_assert_eq!(dry_runs, usize::from(modifiers.contains(&'D')));
        }

        #[test]
        fn prop_error_and_command_are_exclusive(
            letter in proptest::sample::select(vec!['S', 'R', 'Q', 'F', 'T', 'J', 'N', 'X']),
            modifiers in subsequence(
                vec!['c', 'd', 'e', 'i', 'j', 'k', 'l', 'm', 'n', 's', 't', 'y'],
                0..=12,
            )
        ) {
            let flags: String = modifiers.iter().collect();
            let result = CommandTranslator::new()
                .translate(&format!("sacman -{letter}{flags} unit"));

            prop_assert_ne!(result.command.is_empty(), result.error.is_none());
            if result.error.is_some() {
                prop_assert!(result.explanation.is_empty());
            }
        }
    }
}
