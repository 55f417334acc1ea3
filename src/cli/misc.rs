use dpll_sat::{builder::ParserInfo, types::err::ErrorKind};

pub fn examine_parser_report(parse_report: &Result<ParserInfo, ErrorKind>) {
    match parse_report {
        Ok(info) => {
            log::info!("Expected {} atoms.", info.expected_atoms);
            log::info!("Expected {} clauses.", info.expected_clauses);
            log::info!("Added    {} clauses.", info.added_clauses);
        }
        Err(e) => eprintln!("c Parse error: {e}"),
    }
}
