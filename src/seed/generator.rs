use rand::Rng;

use crate::seed::corpus::Corpus;

pub const DOCUMENT_ID_DIGITS: usize = 16;

/// Space-separated random words, at least `min_chars` long. Whole words are
/// appended until the minimum is met, so the result may overshoot by up to
/// one word plus its separator; it is never truncated.
pub fn generate_document_text(corpus: &Corpus, min_chars: usize, rng: &mut impl Rng) -> String {
    let mut text = String::with_capacity(min_chars);
    while text.len() < min_chars {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(corpus.pick(rng));
    }
    text
}

/// A 16-digit numeric document identifier, leading zeros allowed.
pub fn generate_document_id(rng: &mut impl Rng) -> String {
    (0..DOCUMENT_ID_DIGITS)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// The minimal XML envelope the benchmark schema stores documents in.
pub fn wrap_payload(text: &str) -> String {
    format!("<_>{}</_>", text)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn test_corpus() -> Corpus {
        Corpus::load(None).unwrap()
    }

    #[test]
    fn text_meets_the_minimum_length() {
        let corpus = test_corpus();
        let mut rng = StdRng::seed_from_u64(42);
        for min_chars in [1, 2, 10, 257, 4096] {
            let text = generate_document_text(&corpus, min_chars, &mut rng);
            assert!(
                text.len() >= min_chars,
                "{} chars generated for a minimum of {}",
                text.len(),
                min_chars
            );
        }
    }

    #[test]
    fn text_overshoots_by_less_than_one_word() {
        let corpus = test_corpus();
        let mut rng = StdRng::seed_from_u64(1);
        for min_chars in [1, 10, 100, 1000] {
            let text = generate_document_text(&corpus, min_chars, &mut rng);
            assert!(text.len() < min_chars + corpus.longest_word() + 1);
        }
    }

    #[test]
    fn text_is_words_from_the_corpus() {
        let corpus = test_corpus();
        let mut rng = StdRng::seed_from_u64(3);
        let text = generate_document_text(&corpus, 200, &mut rng);
        let mut check_rng = StdRng::seed_from_u64(3);
        for word in text.split(' ') {
            assert_eq!(word, corpus.pick(&mut check_rng));
        }
    }

    #[test]
    fn zero_minimum_yields_the_empty_string() {
        let corpus = test_corpus();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(generate_document_text(&corpus, 0, &mut rng), "");
    }

    #[test]
    fn document_id_is_sixteen_decimal_digits() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let id = generate_document_id(&mut rng);
            assert_eq!(id.len(), DOCUMENT_ID_DIGITS);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn payload_is_wrapped_in_the_envelope() {
        assert_eq!(wrap_payload("lorem ipsum"), "<_>lorem ipsum</_>");
        assert_eq!(wrap_payload(""), "<_></_>");
    }
}
