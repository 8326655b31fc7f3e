//! Sentence and word segmentation for Khmer text
//!
//! Khmer script does not put spaces between words; written text relies on
//! the zero-width space (`U+200B`) between words and the khan mark `។`
//! between sentences. Segmentation here is boundary-character based: input
//! lines are split into sentences at terminator marks, and sentences into
//! words at whitespace and zero-width spaces. Dictionary-driven
//! segmentation of unspaced runs is out of scope; documents following the
//! common ZWSP convention segment cleanly.

use crate::types::Sentence;

/// Characters that terminate a sentence.
///
/// Khan `។` ends a Khmer sentence and bariyoosan `៕` ends a passage;
/// `!` and `?` appear in mixed text.
const SENTENCE_TERMINATORS: [char; 4] = ['។', '៕', '!', '?'];

/// Invisible word separator used in written Khmer.
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Split document text into tokenized sentences.
///
/// Input is processed line by line; blank lines are skipped. Sentence
/// indices are assigned in document order across the whole document.
pub fn tokenize(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for raw in split_sentences(line) {
            let words = segment_words(&raw);
            if words.is_empty() {
                continue;
            }
            let index = sentences.len();
            sentences.push(Sentence::new(words, index));
        }
    }

    sentences
}

/// Split a line into sentences, keeping each terminator with its sentence.
fn split_sentences(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        current.push(ch);
        if SENTENCE_TERMINATORS.contains(&ch) {
            push_nonempty(&mut out, &mut current);
        }
    }
    push_nonempty(&mut out, &mut current);

    out
}

fn push_nonempty(out: &mut Vec<String>, buf: &mut String) {
    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    buf.clear();
}

/// Split a sentence into word tokens.
///
/// Words break at whitespace and zero-width spaces; sentence terminators
/// become their own tokens so the assembler can collapse them later.
fn segment_words(sentence: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in sentence.chars() {
        if ch.is_whitespace() || ch == ZERO_WIDTH_SPACE {
            flush_word(&mut words, &mut current);
        } else if SENTENCE_TERMINATORS.contains(&ch) {
            flush_word(&mut words, &mut current);
            words.push(ch.to_string());
        } else {
            current.push(ch);
        }
    }
    flush_word(&mut words, &mut current);

    words
}

fn flush_word(words: &mut Vec<String>, buf: &mut String) {
    if !buf.is_empty() {
        words.push(std::mem::take(buf));
    }
}
