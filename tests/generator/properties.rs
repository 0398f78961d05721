use rand::rngs::mock::StepRng;
use randstr::alphabet::Alphabet;
use randstr::generator::{self, chunked};
use randstr::{source, Error};
use rstest::rstest;

use crate::common::fixtures::{invalid_alphabets, valid_alphabets};

#[rstest]
#[case(0)]
#[case(1)]
#[case(9)]
#[case(10)]
#[case(100)]
#[case(4096)]
fn it_should_return_the_requested_number_of_characters_from_the_alphabet(#[case] n: usize) {
    for chars in valid_alphabets() {
        let alphabet = Alphabet::new(&chars).unwrap();

        let out = generator::from_alphabet_with(&mut source::fresh(), n, &alphabet);

        assert_eq!(out.len(), n, "alphabet {chars:?}");
        assert!(out.chars().all(|c| chars.contains(c)), "{out:?} is not made of {chars:?}");
    }
}

#[test]
fn it_should_return_an_empty_string_when_no_characters_are_requested() {
    for chars in valid_alphabets() {
        assert_eq!(randstr::from_alphabet(0, &chars).unwrap(), "");
    }

    assert_eq!(randstr::safe(0), "");
    assert_eq!(randstr::lower_alphanumeric(0), "");
    assert_eq!(randstr::simple(0), "");
}

#[test]
fn it_should_repeat_the_only_character_of_a_single_character_alphabet() {
    for n in [0, 1, 7, 10, 333] {
        assert_eq!(randstr::from_alphabet(n, "z").unwrap(), "z".repeat(n));
    }
}

#[test]
fn it_should_reject_invalid_alphabets() {
    for chars in invalid_alphabets() {
        let result = randstr::from_alphabet(10, &chars);

        assert!(
            matches!(
                result,
                Err(Error::EmptyAlphabet { .. } | Error::NonAsciiAlphabet { .. } | Error::AlphabetTooLong { .. })
            ),
            "alphabet {chars:?} gave {result:?}"
        );
    }
}

#[test]
fn it_should_surface_an_empty_alphabet_as_its_own_error() {
    assert!(matches!(randstr::from_alphabet(5, ""), Err(Error::EmptyAlphabet { .. })));
}

#[test]
fn the_error_location_should_point_to_the_calling_code() {
    let err = randstr::from_alphabet(1, "").unwrap_err();

    let Error::EmptyAlphabet { location } = &err else {
        panic!("expected an empty alphabet error, got {err:?}");
    };

    assert_eq!(location.file(), file!());
    assert!(err.to_string().contains(&format!("{}:{}", file!(), location.line())), "{err}");
}

#[test]
fn it_should_produce_the_same_string_for_the_same_seed_length_and_alphabet() {
    let alphabet = Alphabet::new("ACGT").unwrap();

    for seed in [0, 1, 42, u64::MAX] {
        let a = generator::from_alphabet_with(&mut source::seeded(seed), 50, &alphabet);
        let b = generator::from_alphabet_with(&mut source::seeded(seed), 50, &alphabet);

        assert_eq!(a, b);
    }

    assert_eq!(
        generator::simple_with(&mut source::seeded(5), 50),
        generator::simple_with(&mut source::seeded(5), 50)
    );
}

#[test]
fn different_seeds_should_produce_different_strings() {
    let a = generator::safe_with(&mut source::seeded(1), 32);
    let b = generator::safe_with(&mut source::seeded(2), 32);

    assert_ne!(a, b);
}

#[test]
fn it_should_build_the_string_from_the_extracted_chunk_indices() {
    // chunk indices [0, 1, 0, 0, 1] packed from the lowest bits of a 63-bit draw
    let draw: u64 = (1 << chunked::CHUNK_BITS) | (1 << (4 * chunked::CHUNK_BITS));
    let mut rng = StepRng::new(draw << 1, 0);

    let out = generator::from_alphabet_with(&mut rng, 5, &Alphabet::new("ab").unwrap());

    assert_eq!(out, "abaab");
}
