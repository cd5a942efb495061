use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Bumped whenever the token pattern or the stopword table changes, since
/// either one changes the terms an index contains.
pub const STOPWORDS_VERSION: u32 = 1;

lazy_static! {
    // `\b` is Unicode-aware: "café" and "foo_bar" produce no ASCII fragments.
    static ref RE: Regex = Regex::new(r"\b[a-z0-9]+\b").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        // NLTK English stopword list.
        let words: &[&str] = &[
            "i","me","my","myself","we","our","ours","ourselves","you","you're","you've","you'll","you'd",
            "your","yours","yourself","yourselves","he","him","his","himself","she","she's","her","hers",
            "herself","it","it's","its","itself","they","them","their","theirs","themselves",
            "what","which","who","whom","this","that","that'll","these","those",
            "am","is","are","was","were","be","been","being","have","has","had","having",
            "do","does","did","doing","a","an","the","and","but","if","or","because","as","until","while",
            "of","at","by","for","with","about","against","between","into","through","during","before",
            "after","above","below","to","from","up","down","in","out","on","off","over","under",
            "again","further","then","once","here","there","when","where","why","how",
            "all","any","both","each","few","more","most","other","some","such",
            "no","nor","not","only","own","same","so","than","too","very",
            "s","t","can","will","just","don","don't","should","should've","now",
            "d","ll","m","o","re","ve","y","ain","aren","aren't","couldn","couldn't","didn","didn't",
            "doesn","doesn't","hadn","hadn't","hasn","hasn't","haven","haven't","isn","isn't","ma",
            "mightn","mightn't","mustn","mustn't","needn","needn't","shan","shan't","shouldn","shouldn't",
            "wasn","wasn't","weren","weren't","won","won't","wouldn","wouldn't"
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Whether a lowercased token survives filtering and becomes an index term.
pub fn is_indexable(token: &str) -> bool { token.len() > 1 && !is_stopword(token) }

/// Tokenize text into index terms, in order of appearance, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|tok| is_indexable(tok))
        .map(str::to_string)
        .collect()
}

/// Normalize a query term so it can be looked up in the index.
pub fn normalize_term(term: &str) -> String { term.to_lowercase() }
