//! Flat tab-separated reports: one line per token (`.LEX`) and one line per
//! symbol table entry (`.TAB`).

use std::io::Write;

use crate::{
    error::ScanError,
    symbol::{SymbolEntry, SymbolTable},
    token::Token,
};

/// Writes `CODE\tLEXEME\tLINE` for every token, in order.
pub fn write_tokens<'a, W, I>(writer: &mut W, tokens: I) -> Result<(), ScanError>
where
    W: Write,
    I: IntoIterator<Item = &'a Token>,
{
    for token in tokens {
        writeln!(writer, "{}\t{}\t{}", token.kind().code(), token.lexeme(), token.line())?;
    }
    Ok(())
}

/// Writes one line per entry in index order:
/// `INDEX\tATOM\tLEXEME\tLEN_BEFORE\tLEN_AFTER\tTYPE\tLINES`.
pub fn write_symbols<W: Write>(writer: &mut W, table: &SymbolTable) -> Result<(), ScanError> {
    for entry in table.entries() {
        writeln!(writer, "{}", symbol_line(entry))?;
    }
    Ok(())
}

fn symbol_line(entry: &SymbolEntry) -> String {
    let lines = entry
        .lines()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        entry.index(),
        entry.atom().code(),
        entry.lexeme(),
        entry.len_before_truncation(),
        entry.len_after_truncation(),
        entry.kind().code(),
        lines
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::scan, symbol::MAX_LEXEME_LEN};

    fn render(text: &str) -> (String, String) {
        let mut table = SymbolTable::new();
        let tokens = scan(text, &mut table);

        let mut lex = Vec::new();
        write_tokens(&mut lex, &tokens).unwrap();
        let mut tab = Vec::new();
        write_symbols(&mut tab, &table).unwrap();

        (String::from_utf8(lex).unwrap(), String::from_utf8(tab).unwrap())
    }

    #[test]
    fn test_token_report() {
        let (lex, _) = render("x := 10;\nif x # 3");
        assert_eq!(
            lex,
            "IDN01\tX\t1\n\
             SRS04\t:=\t1\n\
             IDN02\t10\t1\n\
             SRS01\t;\t1\n\
             PRS17\tIF\t2\n\
             IDN01\tX\t2\n\
             SRS18\t#\t2\n\
             IDN02\t3\t2\n\
             EOF\tEOF\t2\n"
        );
    }

    #[test]
    fn test_symbol_report() {
        let (_, tab) = render("total := total + Count;\ncount := 1;\ntotal");
        assert_eq!(
            tab,
            "1\tIDN01\tTOTAL\t5\t5\tUNKNOWN\t1,3\n\
             2\tIDN01\tCOUNT\t5\t5\tUNKNOWN\t1,2\n"
        );
    }

    #[test]
    fn test_empty_symbol_report() {
        let (lex, tab) = render("");
        assert_eq!(lex, "EOF\tEOF\t1\n");
        assert_eq!(tab, "");
    }

    #[test]
    fn test_symbol_report_lengths_survive_reading_back() {
        let long = "k".repeat(48);
        let text = format!("short\n{long}\n{}\nmid_sized_name", &long[..36]);
        let (_, tab) = render(&text);

        let first_raw_len = [5, 48, 14];
        for (row, first_len) in tab.lines().zip(first_raw_len) {
            let fields = row.split('\t').collect::<Vec<_>>();
            assert_eq!(fields.len(), 7);
            let before = fields[3].parse::<usize>().unwrap();
            let after = fields[4].parse::<usize>().unwrap();
            assert_eq!(after, first_len.min(MAX_LEXEME_LEN));
            assert_eq!(after, fields[2].chars().count());
            assert!(after <= before);
        }
        assert_eq!(tab.lines().count(), 3);
    }

    #[test]
    fn test_symbol_report_caps_lines() {
        let text = (1..=8).map(|_| "n").collect::<Vec<_>>().join("\n");
        let (_, tab) = render(&text);
        assert_eq!(tab, "1\tIDN01\tN\t1\t1\tUNKNOWN\t1,2,3,4,5\n");
    }
}
