#[cfg(test)]
mod verify {
    use synkeys::completion::{
        dump_words, extract_candidates, swap_case, Candidate, CandidateCache,
    };

    const LISTING: &str = "tqKeyword      xxx bar Baz Foo";

    #[test]
    fn swapping_case_inverts_letters_only() {
        assert_eq!(swap_case("Foo"), "fOO");
        assert_eq!(swap_case("bar"), "BAR");
        assert_eq!(swap_case("if2_x"), "IF2_X");
    }

    #[test]
    fn candidates_are_ordered_by_swapped_case() {
        let candidates = extract_candidates(LISTING);

        let texts: Vec<&str> = candidates
            .iter()
            .map(|candidate| {
                candidate
                    .text
                    .as_str()
            })
            .collect();

        // swapped forms BAR, bAZ, fOO; distinct from both plain
        // lexicographic (Baz, Foo, bar) and case-insensitive order
        assert_eq!(texts, vec!["bar", "Baz", "Foo"]);
    }

    #[test]
    fn candidates_are_deduplicated() {
        let candidates = extract_candidates(
            "tqOne          xxx repeat other\ntqTwo          xxx repeat another",
        );

        let count = candidates
            .iter()
            .filter(|candidate| candidate.text == "repeat")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn candidates_are_well_formed() {
        let listing = "tqMix          xxx a 9lives word_1 zz 7 ok";
        for candidate in extract_candidates(listing) {
            assert!(
                candidate
                    .text
                    .len()
                    >= 2
            );
            assert!(!candidate
                .text
                .starts_with(|c: char| c.is_ascii_digit()));
        }
    }

    #[test]
    fn unpopulated_filetype_looks_up_empty() {
        let cache = CandidateCache::new();

        assert!(cache
            .lookup("haskell")
            .is_empty());
    }

    #[test]
    fn refresh_populates_the_filetype_entry() {
        let mut cache = CandidateCache::new();
        cache.refresh("tq", LISTING);

        let candidates = cache.lookup("tq");
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].text, "bar");

        // other filetypes are unaffected
        assert!(cache
            .lookup("rust")
            .is_empty());
    }

    #[test]
    fn refresh_overwrites_the_whole_entry() {
        let mut cache = CandidateCache::new();
        cache.refresh("tq", LISTING);
        cache.refresh("tq", "tqKeyword      xxx only");

        let candidates = cache.lookup("tq");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "only");
    }

    #[test]
    fn refresh_with_an_error_listing_empties_the_entry() {
        let mut cache = CandidateCache::new();
        cache.refresh("tq", LISTING);
        cache.refresh("tq", "No Syntax items");

        assert!(cache
            .lookup("tq")
            .is_empty());
    }

    #[test]
    fn word_dump_is_plain_sorted() {
        let candidates = extract_candidates(LISTING);

        let mut out: Vec<u8> = Vec::new();
        dump_words(&candidates, &mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, "Baz\nFoo\nbar\n");
    }

    #[test]
    fn candidate_records_serialize_as_text_objects() {
        let candidate = Candidate {
            text: "word".to_string(),
        };

        let rendered = serde_json::to_string(&candidate).unwrap();
        assert_eq!(rendered, r#"{"text":"word"}"#);
    }
}
