//! Stopword lists for the local extractor.

pub const KOREAN_STOPWORDS: &[&str] = &[
    "있는", "하는", "그", "및", "이", "그리고", "또는", "또한", "수", "등", "이런", "저런", "하며",
    "하고", "하지만", "그런", "것", "이것", "저것", "그것", "이는", "있다", "하다", "이다", "된다",
    "에서", "으로", "에게", "뿐만", "아니라", "만약", "때문에",
];

pub const ENGLISH_STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "have", "him", "his", "how", "its", "may", "new", "now", "old",
    "see", "two", "who", "did", "does", "this", "that", "with", "from", "they", "them", "then",
    "than", "there", "these", "those", "what", "when", "where", "which", "while", "will", "would",
    "should", "could", "into", "onto", "over", "under", "about", "after", "before", "been",
    "being", "each", "some", "such", "very", "just", "also", "only", "other", "more", "most",
    "same", "both", "between", "through", "during", "were", "your", "their", "because",
];

pub fn is_korean_stopword(word: &str) -> bool {
    KOREAN_STOPWORDS.contains(&word)
}

pub fn is_english_stopword(word: &str) -> bool {
    ENGLISH_STOPWORDS.contains(&word)
}
