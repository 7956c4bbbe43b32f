//! Stop words excluded from topic extraction.
//!
//! Entries are stored after punctuation stripping, so contractions appear
//! without apostrophes (`dont`, `youre`).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words and conversational filler.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Articles and determiners
        "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every",
        "such", "other", "another", "much", "many", "more", "most", "less", "few",
        // Pronouns
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you",
        "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her",
        "hers", "herself", "it", "its", "itself", "they", "them", "their", "theirs",
        "themselves", "what", "which", "who", "whom", "whose", "someone", "something",
        "anything", "everything", "nothing", "everyone", "anyone",
        // Prepositions
        "about", "above", "across", "after", "against", "along", "among", "around", "at",
        "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "down",
        "during", "except", "for", "from", "in", "inside", "into", "near", "of", "off", "on",
        "onto", "out", "outside", "over", "past", "since", "through", "throughout", "till",
        "to", "toward", "towards", "under", "until", "up", "upon", "with", "within", "without",
        // Conjunctions and adverbs of structure
        "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while",
        "whereas", "unless", "whether", "if", "then", "than", "also", "either", "neither",
        "both", "when", "where", "why", "how", "here", "there", "just", "only", "very",
        "too", "again", "once", "still", "even", "ever", "never", "always", "often",
        "sometimes", "already", "now",
        // Auxiliary and modal verbs
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "doing", "done", "will", "would", "shall", "should",
        "can", "could", "may", "might", "must", "get", "got", "getting", "make", "made",
        // Contractions without apostrophes
        "im", "ive", "ill", "id", "youre", "youve", "youll", "youd", "hes", "shes", "weve",
        "wed", "theyre", "theyve", "theyll", "theyd", "thats",
        "theres", "whats", "lets", "dont", "doesnt", "didnt", "isnt", "arent", "wasnt",
        "werent", "havent", "hasnt", "hadnt", "wont", "wouldnt", "cant", "couldnt",
        "shouldnt", "mustnt",
        // Conversational filler
        "hello", "hi", "hey", "thanks", "thank", "please", "okay", "ok", "yeah", "yes", "yep",
        "no", "nope", "sure", "right", "alright", "like", "really", "actually", "basically",
        "literally", "maybe", "perhaps", "well", "great", "good", "nice", "cool", "fine",
        "um", "umm", "uh", "uhh", "hmm", "mhm", "oh", "ah", "know", "mean", "think", "guess",
        "kind", "sort", "thing", "things", "stuff", "today", "tell", "said", "says", "going",
        "want", "able", "absolutely", "definitely", "certainly", "exactly",
        "totally", "pretty", "quite", "bit", "lot", "lots", "gonna", "wanna", "gotta",
        "kinda", "sorta",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` (already lower-cased) is a stop word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
