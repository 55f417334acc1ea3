use dpll_sat::{
    config::Config,
    context::Context,
    reports::Report,
    types::err::{ErrorKind, ParseError, StateError},
};

mod dimacs {
    use super::*;

    #[test]
    fn satlib_layout() {
        let mut ctx = Context::from_config(Config::default());

        let dimacs = "c This Formular is generated by mcnf
c
c    horn? no
c
p cnf 5 4
 -2 4 -1 0
3 -5 1 0
c a comment between clauses
-3 -4 -5 0
 5 2 0
%
0

";

        let info = ctx.read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(info.expected_atoms, 5);
        assert_eq!(info.expected_clauses, 4);
        assert_eq!(info.added_clauses, 4);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.model_satisfies_input());
    }

    #[test]
    fn several_clauses_per_line() {
        let mut ctx = Context::from_config(Config::default());

        let dimacs = "p cnf 2 4\n1 2 0 -1 2 0\n1 -2 0 -1 -2 0\n";
        assert!(ctx.read_dimacs(dimacs.as_bytes()).is_ok());
        assert_eq!(ctx.clause_count(), 4);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn errors() {
        let cases = [
            ("", ParseError::ProblemSpecification),
            ("p cnf 2\n", ParseError::ProblemSpecification),
            ("p dnf 2 1\n1 0\n", ParseError::ProblemSpecification),
            ("c\n1 0\n", ParseError::MisplacedProblem(2)),
            ("p cnf 2 1\n1 2.0 0\n", ParseError::Line(2)),
            ("p cnf 2 1\n\n-3 0\n", ParseError::AtomOutOfRange(3)),
            ("p cnf 2 1\n1 -2\n", ParseError::UnterminatedClause),
            (
                "p cnf 2 2\n1 0\n",
                ParseError::ClauseCount {
                    expected: 2,
                    found: 1,
                },
            ),
        ];

        for (dimacs, error) in cases {
            let mut ctx = Context::from_config(Config::default());
            assert_eq!(
                ctx.read_dimacs(dimacs.as_bytes()),
                Err(ErrorKind::Parse(error)),
                "{dimacs:?}"
            );
        }
    }

    #[test]
    fn no_read_after_solve() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.read_dimacs("p cnf 1 1\n1 0\n".as_bytes()).is_ok());
        assert!(ctx.solve().is_ok());

        assert_eq!(
            ctx.read_dimacs("p cnf 1 1\n-1 0\n".as_bytes()),
            Err(ErrorKind::State(StateError::SolveComplete))
        );
    }
}
