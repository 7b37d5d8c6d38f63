#![cfg(feature = "std")]

use std::io::Cursor;

use radframe::avec::{ByteCursor, SignatureScanner, scanner};

const PATTERN: [u8; 3] = [0xFE, 0xED, 0xFA];

fn haystack(len: usize, at: usize) -> Vec<u8> {
    let mut data: Vec<u8> = (0..len).map(|i| (i % 200) as u8).collect();
    data[at..at + PATTERN.len()].copy_from_slice(&PATTERN);
    data
}

#[test]
fn find_pattern_at_every_offset() {
    const LEN: usize = 48;

    for chunk_size in PATTERN.len() + 1..LEN {
        for at in 0..=LEN - PATTERN.len() {
            let mut c = ByteCursor::new(Cursor::new(haystack(LEN, at)));
            let mut s = SignatureScanner::with_chunk_size(&PATTERN, chunk_size).unwrap();

            s.scan_to(&mut c).unwrap();

            let position = c.position().unwrap();
            assert_eq!(position, (at + PATTERN.len()) as u64, "chunk {chunk_size}, offset {at}");
        }
    }
}

#[test]
fn continue_reading_after_pattern() {
    let data = haystack(100, 61);
    let mut c = ByteCursor::new(Cursor::new(data.clone()));
    let mut s = SignatureScanner::with_chunk_size(&PATTERN, 8).unwrap();

    s.scan_to(&mut c).unwrap();

    assert_eq!(c.read_exact(4).unwrap(), data[64..68]);
}

#[test]
fn find_repeated_pattern() {
    let mut data = haystack(64, 10);
    data[40..43].copy_from_slice(&PATTERN);

    let mut c = ByteCursor::new(Cursor::new(data));
    let mut s = SignatureScanner::with_chunk_size(&PATTERN, 16).unwrap();

    s.scan_to(&mut c).unwrap();
    assert_eq!(c.position().unwrap(), 13);

    s.scan_to(&mut c).unwrap();
    assert_eq!(c.position().unwrap(), 43);

    assert!(matches!(s.scan_to(&mut c), Err(scanner::Error::NotFound)));
}

#[test]
fn find_pattern_in_final_short_chunk() {
    // 50 bytes read 16 at a time leaves a short final chunk.
    let data = haystack(50, 47);
    let mut c = ByteCursor::new(Cursor::new(data));
    let mut s = SignatureScanner::with_chunk_size(&PATTERN, 16).unwrap();

    s.scan_to(&mut c).unwrap();
    assert_eq!(c.position().unwrap(), 50);
}

#[test]
fn exhaust_source_without_pattern() {
    let data: Vec<u8> = (0..200).collect();
    let mut c = ByteCursor::new(Cursor::new(data));
    let mut s = SignatureScanner::with_chunk_size(&PATTERN, 7).unwrap();

    assert!(matches!(s.scan_to(&mut c), Err(scanner::Error::NotFound)));
}

#[test]
fn partial_pattern_at_end() {
    let mut data = vec![0; 20];
    data[18..].copy_from_slice(&PATTERN[..2]);

    let mut c = ByteCursor::new(Cursor::new(data));
    let mut s = SignatureScanner::new(&PATTERN).unwrap();

    assert!(matches!(s.scan_to(&mut c), Err(scanner::Error::NotFound)));
}

#[test]
fn reject_chunks_no_larger_than_pattern() {
    assert!(matches!(
        SignatureScanner::with_chunk_size(&PATTERN, 3),
        Err(scanner::Error::ChunkTooSmall { chunk_size: 3, pattern_len: 3 })
    ));
    assert!(matches!(
        SignatureScanner::with_chunk_size(&[], 3),
        Err(scanner::Error::ChunkTooSmall { .. })
    ));
}
