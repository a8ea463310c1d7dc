//! Markdown body of a correction reply.

use crate::grammar::MatchResult;

const VERSE: &str = "\
_If you want it to be possessive, it's just \"I-T-S\"_\\
_But if it's supposed to be a contraction then it's \"I-T-apostrophe-S\"_\\
_^^...Scalawag^^_";

const FOOTER: &str = "^^I'm ^^a ^^bot. ^^Please ^^don't ^^hurt ^^me, ^^beep ^^boop!";

/// Quoted snippet, the suggested fix, then the verse and footer.
pub fn render_reply(result: &MatchResult) -> String {
    format!(
        "> {snippet}\n\nI think you want \"{fixed}\", not \"{error}\".  As Strongbad's song says,\n\n{verse}\n\n---\n\n{footer}\n",
        snippet = result.snippet,
        fixed = result.corrected_phrase,
        error = result.matched_phrase,
        verse = VERSE,
        footer = FOOTER,
    )
}
