use phf::phf_map;
use strum::{IntoStaticStr, VariantArray};

/// Reserved words of the language. The strum string is the atom code written to reports.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, IntoStaticStr, VariantArray)]
pub enum Keyword {
    #[strum(to_string = "PRS01")]
    Integer,
    #[strum(to_string = "PRS02")]
    Real,
    #[strum(to_string = "PRS03")]
    Character,
    #[strum(to_string = "PRS04")]
    String,
    #[strum(to_string = "PRS05")]
    Boolean,
    #[strum(to_string = "PRS06")]
    Void,
    #[strum(to_string = "PRS07")]
    True,
    #[strum(to_string = "PRS08")]
    False,
    #[strum(to_string = "PRS09")]
    Declarations,
    #[strum(to_string = "PRS10")]
    EndDeclarations,
    #[strum(to_string = "PRS11")]
    Program,
    #[strum(to_string = "PRS12")]
    EndProgram,
    #[strum(to_string = "PRS13")]
    Functions,
    #[strum(to_string = "PRS14")]
    EndFunctions,
    #[strum(to_string = "PRS15")]
    EndFunction,
    #[strum(to_string = "PRS16")]
    Return,
    #[strum(to_string = "PRS17")]
    If,
    #[strum(to_string = "PRS18")]
    Else,
    #[strum(to_string = "PRS19")]
    EndIf,
    #[strum(to_string = "PRS20")]
    While,
    #[strum(to_string = "PRS21")]
    EndWhile,
    #[strum(to_string = "PRS22")]
    Break,
    #[strum(to_string = "PRS23")]
    Print,
}

impl Keyword {
    /// Source spelling as written in the language reference.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Integer => "integer",
            Keyword::Real => "real",
            Keyword::Character => "character",
            Keyword::String => "string",
            Keyword::Boolean => "boolean",
            Keyword::Void => "void",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Declarations => "declarations",
            Keyword::EndDeclarations => "endDeclarations",
            Keyword::Program => "program",
            Keyword::EndProgram => "endProgram",
            Keyword::Functions => "functions",
            Keyword::EndFunctions => "endFunctions",
            Keyword::EndFunction => "endFunction",
            Keyword::Return => "return",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::EndIf => "endIf",
            Keyword::While => "while",
            Keyword::EndWhile => "endWhile",
            Keyword::Break => "break",
            Keyword::Print => "print",
        }
    }

    pub fn code(self) -> &'static str {
        self.into()
    }
}

// Keys are lowercase; lookups fold the candidate before probing.
static RESERVED_WORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "integer" => Keyword::Integer,
    "real" => Keyword::Real,
    "character" => Keyword::Character,
    "string" => Keyword::String,
    "boolean" => Keyword::Boolean,
    "void" => Keyword::Void,
    "true" => Keyword::True,
    "false" => Keyword::False,
    "declarations" => Keyword::Declarations,
    "enddeclarations" => Keyword::EndDeclarations,
    "program" => Keyword::Program,
    "endprogram" => Keyword::EndProgram,
    "functions" => Keyword::Functions,
    "endfunctions" => Keyword::EndFunctions,
    "endfunction" => Keyword::EndFunction,
    "return" => Keyword::Return,
    "if" => Keyword::If,
    "else" => Keyword::Else,
    "endif" => Keyword::EndIf,
    "while" => Keyword::While,
    "endwhile" => Keyword::EndWhile,
    "break" => Keyword::Break,
    "print" => Keyword::Print,
};

/// Immutable reserved-word table, built at compile time and shared by reference.
#[derive(Debug)]
pub struct ReservedWords {
    inner: &'static phf::Map<&'static str, Keyword>,
}

static STANDARD: ReservedWords = ReservedWords {
    inner: &RESERVED_WORDS,
};

impl ReservedWords {
    pub fn standard() -> &'static ReservedWords {
        &STANDARD
    }

    /// Case-insensitive lookup of a raw lexeme.
    pub fn classify(&self, lexeme: &str) -> Option<Keyword> {
        // Every reserved word is ASCII and at most 15 bytes long.
        if lexeme.len() > 15 || !lexeme.is_ascii() {
            return None;
        }
        self.inner.get(lexeme.to_ascii_lowercase().as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_is_reserved() {
        let reserved = ReservedWords::standard();
        assert_eq!(reserved.len(), Keyword::VARIANTS.len());
        for keyword in Keyword::VARIANTS {
            assert_eq!(reserved.classify(keyword.as_str()), Some(*keyword));
        }
    }

    #[test]
    fn test_classify_ignores_case() {
        let reserved = ReservedWords::standard();
        assert_eq!(reserved.classify("ENDWHILE"), Some(Keyword::EndWhile));
        assert_eq!(reserved.classify("EndWhile"), Some(Keyword::EndWhile));
        assert_eq!(reserved.classify("pRiNt"), Some(Keyword::Print));
    }

    #[test]
    fn test_classify_rejects_identifiers() {
        let reserved = ReservedWords::standard();
        assert_eq!(reserved.classify("end_while"), None);
        assert_eq!(reserved.classify("integers"), None);
        assert_eq!(reserved.classify("endDeclarationsAndMore"), None);
        assert_eq!(reserved.classify("prínt"), None);
        assert_eq!(reserved.classify(""), None);
    }

    #[test]
    fn test_codes_are_sequential() {
        let codes = Keyword::VARIANTS
            .iter()
            .map(|keyword| keyword.code())
            .collect::<Vec<_>>();
        assert_eq!(codes.first(), Some(&"PRS01"));
        assert_eq!(codes.last(), Some(&"PRS23"));
        for (position, code) in codes.iter().enumerate() {
            assert_eq!(*code, format!("PRS{:02}", position + 1));
        }
    }
}
