use chrono::NaiveDate;
use proptest::prelude::*;
use syd_domain::{FlagDescriptor, FlagStatus};
use syd_registry::FlagRegistry;
use syd_resolver::{ValueSource, parse_flag_value, resolve};

fn registry_with(defaults: &[bool]) -> FlagRegistry {
    let mut registry = FlagRegistry::new();
    for (i, default_value) in defaults.iter().enumerate() {
        registry
            .register(
                FlagDescriptor::builder()
                    .name(format!("FLAG_{i}"))
                    .env_key(format!("ENABLE_FLAG_{i}"))
                    .default_value(*default_value)
                    .status(FlagStatus::Stable)
                    .created_at(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
                    .build(),
            )
            .unwrap();
    }
    registry
}

fn spelling(word: &str, mask: u16) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| if mask & (1 << i) == 0 { c } else { c.to_ascii_uppercase() })
        .collect()
}

proptest! {
    #[test]
    fn absent_overrides_yield_defaults(defaults in proptest::collection::vec(any::<bool>(), 0..16)) {
        let registry = registry_with(&defaults);
        let flags = resolve(&registry, &Vec::<(String, String)>::new()).unwrap();

        for (i, default_value) in defaults.iter().enumerate() {
            let flag = flags.get(&format!("FLAG_{i}")).unwrap();
            prop_assert_eq!(flag.value, *default_value);
            prop_assert_eq!(flag.source, ValueSource::Default);
        }
    }

    #[test]
    fn any_letter_case_of_true_and_false_parses(mask in any::<u16>(), pad in "[ \t]{0,3}") {
        let truthy = format!("{pad}{}{pad}", spelling("true", mask));
        let falsy = format!("{pad}{}{pad}", spelling("false", mask));

        prop_assert_eq!(parse_flag_value(&truthy), Ok(Some(true)));
        prop_assert_eq!(parse_flag_value(&falsy), Ok(Some(false)));
    }

    #[test]
    fn overrides_win_over_any_default(default_value in any::<bool>(), value in any::<bool>()) {
        let registry = registry_with(&[default_value]);
        let raw = if value { "1" } else { "0" };
        let flags = resolve(&registry, &[("ENABLE_FLAG_0", raw)]).unwrap();

        prop_assert_eq!(flags.is_enabled("FLAG_0").unwrap(), value);
    }

    #[test]
    fn other_words_are_rejected(raw in "[a-zA-Z2-9]{1,8}") {
        prop_assume!(!raw.eq_ignore_ascii_case("true") && !raw.eq_ignore_ascii_case("false"));
        let registry = registry_with(&[true]);

        prop_assert!(parse_flag_value(&raw).is_err());
        prop_assert!(resolve(&registry, &[("ENABLE_FLAG_0", raw.as_str())]).is_err());
    }
}
