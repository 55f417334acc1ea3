use dpll_sat::{
    config::{Config, PoolRestoration},
    context::Context,
    generic::random::MinimalPCG32,
    reports::Report,
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
};

use rand::Rng;

/// A random formula over `atoms` atoms, with clauses of between one and three literals.
fn random_formula(rng: &mut MinimalPCG32, atoms: u32, clauses: usize) -> Vec<CClause> {
    (0..clauses)
        .map(|_| {
            let size = rng.gen_range(1..=3);
            (0..size)
                .map(|_| CLiteral::new(rng.gen_range(0..atoms), rng.gen_bool(0.5)))
                .collect()
        })
        .collect()
}

/// Whether some full valuation satisfies every clause, by brute force.
fn brute_force_satisfiable(atoms: u32, clauses: &[CClause]) -> bool {
    (0..(1_u64 << atoms)).any(|bits| {
        let valuation: CValuation = (0..atoms).map(|atom| Some(bits >> atom & 1 == 1)).collect();
        clauses.iter().all(|clause| clause.satisfied_on(&valuation))
    })
}

fn context_from(config: Config, seed: u64, atoms: u32, clauses: &[CClause]) -> Context {
    let mut ctx = Context::from_config(config);
    ctx.set_seed(seed);
    for _ in 0..atoms {
        assert!(ctx.fresh_atom().is_ok());
    }
    for clause in clauses {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }
    ctx
}

fn agreement(config: Config) {
    let mut rng = MinimalPCG32::from_u64(2024);

    for round in 0..200 {
        let atoms = rng.gen_range(1..=10);
        let clause_count = rng.gen_range(0..=(atoms as usize * 5));
        let clauses = random_formula(&mut rng, atoms, clause_count);

        let mut ctx = context_from(config.clone(), round, atoms, &clauses);
        let report = ctx.solve().unwrap();

        match brute_force_satisfiable(atoms, &clauses) {
            true => {
                assert_eq!(report, Report::Satisfiable, "round {round}");
                assert!(ctx.model_satisfies_input(), "round {round}");
            }
            false => assert_eq!(report, Report::Unsatisfiable, "round {round}"),
        }

        // Atoms valued by preprocessing are not returned to the pool.
        let mut atoms_in_pool = ctx.pool.atoms().to_vec();
        atoms_in_pool.sort();
        if report == Report::Unsatisfiable && !config.preprocessing.value {
            assert_eq!(atoms_in_pool, (0..atoms).collect::<Vec<_>>(), "round {round}");
        }
    }
}

mod properties {
    use super::*;

    #[test]
    fn agreement_default() {
        agreement(Config::default());
    }

    #[test]
    fn agreement_random_polarity() {
        let mut config = Config::default();
        config.polarity_lean.value = 0.5;
        agreement(config);
    }

    #[test]
    fn agreement_negative_first() {
        let mut config = Config::default();
        config.polarity_lean.value = 0.0;
        agreement(config);
    }

    #[test]
    fn agreement_preprocessing() {
        let mut config = Config::default();
        config.preprocessing.value = true;
        agreement(config);
    }

    #[test]
    fn decisions_only_is_sound_on_satisfiable_reports() {
        let mut config = Config::default();
        config.pool_restoration.value = PoolRestoration::DecisionsOnly;

        let mut rng = MinimalPCG32::from_u64(7);
        for round in 0..200 {
            let atoms = rng.gen_range(1..=10);
            let clause_count = rng.gen_range(0..=(atoms as usize * 5));
            let clauses = random_formula(&mut rng, atoms, clause_count);

            let mut ctx = context_from(config.clone(), round, atoms, &clauses);
            match ctx.solve().unwrap() {
                Report::Satisfiable => assert!(ctx.model_satisfies_input(), "round {round}"),
                Report::Unsatisfiable => {}
                Report::Unknown => panic!("round {round}"),
            }
        }
    }

    #[test]
    fn determinism() {
        let mut rng = MinimalPCG32::from_u64(99);
        let mut config = Config::default();
        config.polarity_lean.value = 0.5;

        for seed in 0..50 {
            let clauses = random_formula(&mut rng, 8, 30);

            let mut a = context_from(config.clone(), seed, 8, &clauses);
            let mut b = context_from(config.clone(), seed, 8, &clauses);

            assert_eq!(a.solve(), b.solve());
            assert_eq!(a.result_string(), b.result_string());
            assert_eq!(a.counters.selections, b.counters.selections);
        }
    }

    #[test]
    fn seeds_vary_selection() {
        // A formula with no units and many satisfying valuations, so models depend on the atoms drawn.
        let clauses: Vec<CClause> = (0..6)
            .map(|atom| vec![CLiteral::new(atom, true), CLiteral::new(atom + 1, false)])
            .collect();

        let models: std::collections::BTreeSet<_> = (0..20)
            .map(|seed| {
                let mut config = Config::default();
                config.polarity_lean.value = 0.5;
                let mut ctx = context_from(config, seed, 7, &clauses);
                assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
                ctx.result_string()
            })
            .collect();

        assert!(models.len() > 1);
    }

    #[test]
    fn propagation_fixpoint() {
        let mut rng = MinimalPCG32::from_u64(5);

        for _ in 0..100 {
            let clauses = random_formula(&mut rng, 6, 12);
            let mut ctx = context_from(Config::default(), 0, 6, &clauses);

            let mut formula = ctx.formula.clone();
            if ctx.unit_propagate(&mut formula) == dpll_sat::procedures::Status::Normal {
                assert!(formula.clauses.iter().all(|clause| clause.size() != 1));
            }
        }
    }
}
