//! Text normalization applied before prompting
//!
//! Steps, in order: lowercase, strip markup, drop ASCII punctuation, drop
//! English stop words. Every step is total; malformed markup degrades to
//! whatever text the HTML parser recovers. A `<` that does not open a
//! complete tag is plain text, so a stray comparison sign never swallows
//! the rest of the document.

use scraper::Html;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

/// English stop words (NLTK list)
const ENGLISH_STOP_WORDS: [&str; 179] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Process-wide stop-word set, built on first use and never mutated
static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Normalize raw document text for prompting
///
/// # Examples
///
/// ```
/// use resume_extractor::normalize;
///
/// let text = normalize("<p>I am a <b>Senior</b> Rust Engineer!</p>");
/// assert_eq!(text, "senior rust engineer");
/// ```
pub fn normalize(raw_text: &str) -> String {
    let text = raw_text.to_lowercase();
    let text = strip_markup(&text);
    let text = remove_punctuation(&text);
    remove_stop_words(&text)
}

/// Replace markup with its inner text and decode character references
///
/// Text with neither a complete tag nor a character reference is returned
/// as-is.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    if !has_tag(text) && !has_character_reference(text) {
        return Cow::Borrowed(text);
    }

    let fragment = Html::parse_fragment(&escape_stray_angles(text));
    let inner: String = fragment.root_element().text().collect();

    // Character references can decode to uppercase letters
    Cow::Owned(inner.to_lowercase())
}

/// Drop every ASCII punctuation character
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Drop whitespace-separated tokens found in the stop-word set
pub fn remove_stop_words(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Byte length of the tag opening `rest`, if `rest` starts with one
///
/// A tag is a `<` directly followed by a tag name, closing slash or `!`,
/// running to the first `>` before any other `<`. Comments run to `-->`.
fn tag_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let opens = bytes
        .get(1)
        .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'/' || *b == b'!');
    if bytes.first() != Some(&b'<') || !opens {
        return None;
    }
    if rest.starts_with("<!--") {
        if let Some(end) = rest.find("-->") {
            return Some(end + 3);
        }
    }

    let end = rest[1..].find(|c: char| c == '<' || c == '>')? + 1;
    (bytes[end] == b'>').then_some(end + 1)
}

fn has_tag(text: &str) -> bool {
    text.match_indices('<')
        .any(|(i, _)| tag_len(&text[i..]).is_some())
}

/// `&name;`, `&#NN;` or `&#xHH;`
fn has_character_reference(text: &str) -> bool {
    text.match_indices('&')
        .any(|(i, _)| is_reference(&text[i + 1..]))
}

fn is_reference(after_amp: &str) -> bool {
    let Some(end) = after_amp.find(';') else {
        return false;
    };
    let name = &after_amp[..end];
    let (digits, radix) = match name.strip_prefix('#') {
        Some(num) => match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => (hex, 16),
            None => (num, 10),
        },
        None => {
            return name
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
                && name.chars().all(|c| c.is_ascii_alphanumeric());
        }
    };
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

/// Rewrite every `<` that does not open a tag as `&lt;`
fn escape_stray_angles(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match tag_len(rest) {
            Some(len) => {
                out.push_str(&rest[..len]);
                rest = &rest[len..];
            }
            None => {
                out.push_str("&lt;");
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
