//! Rule-based English lemmatization.
//!
//! An irregular-form table plus ordered suffix rules (plural, participle,
//! past tense) with the usual stem fixups (consonant de-doubling and
//! e-restoration). Heuristic, not dictionary-backed: it covers the review
//! vocabulary well enough for trigger matching and term weighting, and is
//! fully deterministic.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    const PAIRS: &[(&str, &str)] = &[
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("did", "do"),
        ("does", "do"),
        ("done", "do"),
        ("doing", "do"),
        ("went", "go"),
        ("gone", "go"),
        ("goes", "go"),
        ("using", "use"),
        ("used", "use"),
        ("made", "make"),
        ("said", "say"),
        ("took", "take"),
        ("taken", "take"),
        ("gave", "give"),
        ("given", "give"),
        ("got", "get"),
        ("gotten", "get"),
        ("came", "come"),
        ("found", "find"),
        ("saw", "see"),
        ("seen", "see"),
        ("kept", "keep"),
        ("sent", "send"),
        ("lost", "lose"),
        ("paid", "pay"),
        ("told", "tell"),
        ("knew", "know"),
        ("known", "know"),
        ("thought", "think"),
        ("brought", "bring"),
        ("bought", "buy"),
        ("left", "leave"),
        ("felt", "feel"),
        ("held", "hold"),
        ("meant", "mean"),
        ("met", "meet"),
        ("sat", "sit"),
        ("stood", "stand"),
        ("understood", "understand"),
        ("wrote", "write"),
        ("written", "write"),
        ("sold", "sell"),
        ("broke", "break"),
        ("broken", "break"),
        ("froze", "freeze"),
        ("frozen", "freeze"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        // Lexicalized -ing form: keep as-is, it is its own lemma.
        ("pending", "pending"),
        // -use stems that the suffix fixups cannot restore.
        ("confused", "confuse"),
        ("confusing", "confuse"),
    ];
    PAIRS.iter().copied().collect()
});

/// Lemmatize one lowercase word token.
pub fn lemma(word: &str) -> String {
    if let Some(&base) = IRREGULAR.get(word) {
        return base.to_string();
    }
    if word.chars().count() <= 3 {
        return word.to_string();
    }

    // Plural / third-person forms.
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.chars().count() >= 2 {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            let stem = &word[..word.len() - 2];
            return restore_e(stem);
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }

    // Present participle.
    if word.chars().count() >= 6 {
        if let Some(stem) = word.strip_suffix("ing") {
            return fixup(stem);
        }
    }

    // Past tense.
    if word.chars().count() >= 5 {
        if word.ends_with("eed") {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ed") {
            if let Some(s) = stem.strip_suffix('i') {
                return format!("{s}y");
            }
            return fixup(stem);
        }
    }

    word.to_string()
}

/// Stem fixups after stripping -ing/-ed, in priority order.
fn fixup(stem: &str) -> String {
    let mut s = stem.to_string();
    if s.ends_with("at") || s.ends_with("bl") || s.ends_with("iz") {
        s.push('e');
        return s;
    }
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    if n >= 2
        && chars[n - 1] == chars[n - 2]
        && is_consonant(chars[n - 1])
        && !matches!(chars[n - 1], 'l' | 's' | 'z')
    {
        s.pop();
        return s;
    }
    if s.ends_with('v') || s.ends_with('z') || s.ends_with("rg") || s.ends_with("rc") {
        s.push('e');
        return s;
    }
    // Short consonant-vowel-consonant stems lost a final e (mak-, lov-).
    if n == 3
        && is_consonant(chars[0])
        && !is_consonant(chars[1])
        && is_consonant(chars[2])
        && !matches!(chars[2], 'w' | 'x' | 'y')
    {
        s.push('e');
    }
    s
}

fn restore_e(stem: &str) -> String {
    let mut s = stem.to_string();
    if s.ends_with('z') || s.ends_with('v') {
        s.push('e');
    }
    s
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
