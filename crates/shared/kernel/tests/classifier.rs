use proptest::prelude::*;
use shelf_kernel::device::{MOBILE_TOKENS, classify, matched_token};
use shelf_kernel::domain::device::DeviceClass;

/// Flips the case of every ASCII letter whose mask bit is set.
fn scramble_case(token: &str, mask: u64) -> String {
    token
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if (mask >> (i % 64)) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn android_anywhere_in_any_case_is_mobile(
        prefix in ".{0,40}",
        suffix in ".{0,40}",
        mask in any::<u64>(),
    ) {
        let identity = format!("{prefix}{}{suffix}", scramble_case("Android", mask));
        prop_assert_eq!(classify(Some(&identity)), DeviceClass::Mobile);
    }

    #[test]
    fn any_listed_token_is_mobile(
        index in 0..MOBILE_TOKENS.len(),
        prefix in "[ -~]{0,32}",
        mask in any::<u64>(),
    ) {
        let identity = format!("{prefix}{}", scramble_case(MOBILE_TOKENS[index], mask));
        prop_assert_eq!(classify(Some(&identity)), DeviceClass::Mobile);
    }

    #[test]
    fn identities_without_tokens_are_desktop(identity in "[ -~]{0,80}") {
        let lowered = identity.to_ascii_lowercase();
        prop_assume!(MOBILE_TOKENS.iter().all(|t| !lowered.contains(&t.to_ascii_lowercase())));

        prop_assert_eq!(matched_token(&identity), None);
        prop_assert_eq!(classify(Some(&identity)), DeviceClass::Desktop);
    }

    #[test]
    fn classification_is_idempotent(identity in ".{0,80}") {
        let first = classify(Some(&identity));
        let second = classify(Some(&identity));
        prop_assert_eq!(first, second);
    }
}

#[test]
fn digits_and_punctuation_only_are_desktop() {
    assert_eq!(classify(Some("12345 ;:/()[]")), DeviceClass::Desktop);
}
