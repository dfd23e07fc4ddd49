/// Terms stripped from a prompt before it is used as a GIF search query.
pub const STOPLIST: [&str; 9] = [
    "create", "generate", "gif", "video", "make", "show", "design", "a", "the",
];

pub const MAX_QUERY_CHARS: usize = 50;

/// Derive a short search query from a prompt.
///
/// Stoplist terms are removed as raw substrings, not whole words, so
/// "feather" loses its "the" and "cat" loses its "a". That mirrors the
/// behaviour existing clients rely on.
///
/// A second pass is a no-op for ordinary prompts but not for every input:
/// removing one term can join the letters of another, so "gaif" becomes
/// "gif" and then "".
pub fn extract(prompt: &str) -> String {
    let mut keywords = prompt.to_lowercase();
    for word in STOPLIST {
        keywords = keywords.replace(word, "");
    }

    let collapsed = keywords.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(MAX_QUERY_CHARS).collect();
    truncated.trim_end().to_string()
}
