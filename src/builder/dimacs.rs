use crate::{
    builder::ParserInfo,
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::{self},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use std::io::BufRead;

impl<R: rand::Rng> GenericContext<R> {
    /// Reads a DIMACS input into the context.
    ///
    /// The input is read in two phases:
    /// - A preamble of comments and blank lines, ended by the problem specification `p cnf <atoms> <clauses>`.
    /// - A formula of clauses, each a sequence of non-zero integers ended by `0`.
    ///   A clause may span lines, and a line may hold many clauses.
    ///   Comments are skipped, and a line beginning with `%` ends the formula.
    ///
    /// Literals are added as read, and so duplicate literals are kept.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use dpll_sat::context::Context;
    /// # use dpll_sat::config::Config;
    /// # use dpll_sat::types::err::{ErrorKind, ParseError};
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = "p cnf 2 1\n 1 3 0\n";
    /// assert_eq!(
    ///     the_context.read_dimacs(dimacs.as_bytes()),
    ///     Err(ErrorKind::Parse(ParseError::AtomOutOfRange(2)))
    /// );
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        self.check_input()?;

        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        // first phase, read until the problem specification
        'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'preamble_loop,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();
                    match (problem_details.next(), problem_details.next()) {
                        (Some("p"), Some("cnf")) => {}
                        _ => {
                            return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification))
                        }
                    }

                    let mut count = || -> Result<usize, err::ErrorKind> {
                        match problem_details.next().map(|string| string.parse::<usize>()) {
                            Some(Ok(count)) => Ok(count),
                            _ => Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
                        }
                    };

                    info.expected_atoms = count()?;
                    info.expected_clauses = count()?;

                    if problem_details.next().is_some() {
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                    }

                    log::info!(target: targets::PARSER, "Expected: {} atoms and {} clauses", info.expected_atoms, info.expected_clauses);
                    break 'preamble_loop;
                }

                Some(_) => {
                    return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                        line_counter,
                    )))
                }
            }
        }

        let atom_count = std::cmp::max(info.expected_atoms, self.atom_count());
        if atom::from_external(atom_count as isize).is_none() && atom_count > 0 {
            return Err(err::ErrorKind::from(err::BuildError::AtomsExhausted));
        }
        self.ensure_atoms(atom_count);

        // second phase, read until the formula ends
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => continue 'formula_loop,
                Some('p') => {
                    return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                        line_counter,
                    )))
                }
                _ => {}
            }

            for item in buffer.split_whitespace() {
                match item {
                    "0" => {
                        let the_clause = std::mem::take(&mut clause_buffer);
                        self.add_clause(the_clause)?;
                        info.added_clauses += 1;
                    }

                    _ => {
                        let parsed_int = match item.parse::<isize>() {
                            Ok(int) => int,
                            Err(_) => {
                                return Err(err::ErrorKind::from(err::ParseError::Line(
                                    line_counter,
                                )))
                            }
                        };

                        let the_literal = match CLiteral::from_int(parsed_int) {
                            Some(literal) if (literal.atom() as usize) < atom_count => {
                                literal
                            }
                            _ => {
                                return Err(err::ErrorKind::from(err::ParseError::AtomOutOfRange(
                                    line_counter,
                                )))
                            }
                        };

                        clause_buffer.push(the_literal);
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(err::ParseError::UnterminatedClause));
        }

        if info.added_clauses != info.expected_clauses {
            return Err(err::ErrorKind::from(err::ParseError::ClauseCount {
                expected: info.expected_clauses,
                found: info.added_clauses,
            }));
        }

        log::info!(target: targets::PARSER, "Added: {} clauses", info.added_clauses);
        Ok(info)
    }
}
