use dpll_sat::{config::Config, context::Context, reports::Report};

fn read(dimacs: &str) -> Context {
    let mut ctx = Context::from_config(Config::default());
    assert!(ctx.read_dimacs(dimacs.as_bytes()).is_ok());
    ctx
}

mod basic {
    use dpll_sat::structures::literal::{CLiteral, Literal};

    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = read("p cnf 1 1\n1 0\n");

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.result_string().unwrap(), "SAT\n1 0");
        assert_eq!(ctx.counters.selections, 0);
    }

    #[test]
    fn contradiction() {
        let mut ctx = read("p cnf 1 2\n1 0\n-1 0\n");

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.result_string().unwrap(), "UNSAT");
        assert!(ctx.model().is_none());
    }

    #[test]
    fn exclusive_or() {
        let mut ctx = read("p cnf 2 2\n1 2 0\n-1 -2 0\n");

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.model_satisfies_input());

        let result = ctx.result_string().unwrap();
        assert!(result == "SAT\n1 -2 0" || result == "SAT\n-1 2 0");
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());
        let p = CLiteral::new(ctx.fresh_atom().unwrap(), true);
        let q = CLiteral::new(ctx.fresh_atom().unwrap(), true);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable));

        // Both polarities of the first atom drawn are tried.
        assert!(ctx.counters.branches >= 2);
        assert!(ctx.counters.conflicts >= 2);
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());
        let p = CLiteral::new(ctx.fresh_atom().unwrap(), true);
        let q = CLiteral::new(ctx.fresh_atom().unwrap(), true);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn no_clauses() {
        let mut ctx = read("p cnf 3 0\n");

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.result_string().unwrap(), "SAT\n1 2 3 0");
    }

    #[test]
    fn no_atoms() {
        let mut ctx = read("p cnf 0 0\n");

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.result_string().unwrap(), "SAT\n 0");
    }

    #[test]
    fn empty_clause() {
        let mut ctx = read("p cnf 2 2\n1 2 0\n0\n");
        assert!(ctx.formula.has_empty_clause());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.selections, 0);
        assert_eq!(ctx.counters.conflicts, 1);
    }

    #[test]
    fn unvalued_atoms_are_positive() {
        // The second atom is never valued, as the first satisfies every clause.
        let mut ctx = read("p cnf 2 2\n1 0\n1 2 0\n");

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(1), None);
        assert_eq!(ctx.result_string().unwrap(), "SAT\n1 2 0");
    }

    #[test]
    fn solve_once() {
        let mut ctx = read("p cnf 1 1\n1 0\n");

        assert!(ctx.solve().is_ok());
        assert!(ctx.solve().is_err());
    }

    #[test]
    fn input_unchanged_by_solve() {
        let mut ctx = read("p cnf 3 3\n1 2 0\n-1 3 0\n-2 -3 0\n");
        let before = ctx.formula.clone();

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.formula, before);
    }
}
