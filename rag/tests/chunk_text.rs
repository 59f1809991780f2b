use rag::{RagError, chunk_text};

#[test]
fn windows_advance_by_size_minus_overlap() {
    let chunks = chunk_text("abcdefghij", 4, 1).expect("valid chunking");
    assert_eq!(chunks, vec!["abcd", "defg", "ghij"]);
}

#[test]
fn empty_and_blank_text_produce_no_chunks() {
    assert!(chunk_text("", 600, 100).expect("valid chunking").is_empty());
    assert!(chunk_text("   \n\t  ", 4, 1).expect("valid chunking").is_empty());
}

#[test]
fn rejects_overlap_not_smaller_than_size() {
    let err = chunk_text("abc", 4, 4).expect_err("overlap == size must fail");
    assert!(matches!(err, RagError::InvalidChunking { size: 4, overlap: 4 }));

    let err = chunk_text("abc", 0, 0).expect_err("zero size must fail");
    assert!(matches!(err, RagError::InvalidChunking { size: 0, .. }));
}

#[test]
fn zero_overlap_gives_ceil_len_over_size_pieces() {
    for len in 1..=25usize {
        let text: String = "x".repeat(len);
        for size in 1..=7usize {
            let chunks = chunk_text(&text, size, 0).expect("valid chunking");
            assert_eq!(chunks.len(), len.div_ceil(size), "len {} size {}", len, size);
        }
    }
}

#[test]
fn chunks_are_trimmed_and_never_empty() {
    let text = "alpha    \n\n     beta   gamma\n\n\n\n\n\n\n\n     delta";
    let chunks = chunk_text(text, 8, 2).expect("valid chunking");
    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert!(!chunk.is_empty());
        assert_eq!(chunk.trim(), chunk);
    }
}

#[test]
fn overlapping_chunks_cover_the_whole_text() {
    let text = "thequickbrownfoxjumpsoverthelazydog";
    for (size, overlap) in [(4, 1), (5, 2), (10, 3), (6, 0), (7, 6)] {
        let chunks = chunk_text(text, size, overlap).expect("valid chunking");
        let mut rebuilt = chunks[0].clone();
        for chunk in &chunks[1..] {
            rebuilt.extend(chunk.chars().skip(overlap));
        }
        assert_eq!(rebuilt, text, "size {} overlap {}", size, overlap);
    }
}

#[test]
fn counts_characters_not_bytes() {
    let chunks = chunk_text("ñañañaña", 3, 1).expect("valid chunking");
    assert_eq!(chunks, vec!["ñañ", "ñañ", "ñañ", "ña"]);
}
