//! Integer-linear-programming lineup optimizer.
//!
//! Each candidate gets one binary decision variable. The model maximizes total
//! projected points subject to the salary cap, every position bound in the
//! league's [`RosterRules`], and the exact roster size when the league has
//! one. A player eligible at several positions contributes its variable to
//! every bound it is eligible for.
//!
//! The model is built and dropped inside [`optimize`]; nothing is shared
//! between calls, so independent optimizations can run concurrently.

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError,
    Solution, SolverModel, Variable,
};
use tracing::{debug, warn};

use super::record::PlayerRecord;
use super::rules::RosterRules;
use crate::{cli::types::SalaryCap, LineupError, Result};


/// Selected players, as ascending indices into the candidate pool.
///
/// An empty lineup means no roster could be built: either the pool was empty
/// or no combination of candidates satisfies the rules within the cap.
#[derive(Debug, Clone)]
pub struct Lineup<'a> {
    pool: &'a [PlayerRecord],
    selected: Vec<usize>,
}

impl<'a> Lineup<'a> {
    pub fn empty(pool: &'a [PlayerRecord]) -> Self {
        Self {
            pool,
            selected: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.selected
    }

    pub fn records(&self) -> Vec<&'a PlayerRecord> {
        self.selected.iter().map(|&i| &self.pool[i]).collect()
    }

    pub fn total_points(&self) -> f64 {
        self.selected
            .iter()
            .map(|&i| self.pool[i].projected_points)
            .sum()
    }

    pub fn total_salary(&self) -> f64 {
        self.selected.iter().map(|&i| self.pool[i].salary).sum()
    }
}

/// Pick the point-maximizing lineup from `pool` under `rules` and `salary_cap`.
///
/// Infeasibility is not an error: it yields an empty [`Lineup`]. An
/// unexpected solver failure, or a solver answer that breaks the rules or the
/// cap, is returned as [`LineupError::Solver`].
///
/// Which of several equally good lineups is returned is up to the solver.
pub fn optimize<'a>(
    pool: &'a [PlayerRecord],
    rules: &RosterRules,
    salary_cap: SalaryCap,
) -> Result<Lineup<'a>> {
    if pool.is_empty() {
        debug!(league = %rules.league, "empty candidate pool, skipping solve");
        return Ok(Lineup::empty(pool));
    }
    if let Some(reason) = trivially_infeasible(pool, rules) {
        debug!(league = %rules.league, %reason, "no lineup possible, skipping solve");
        return Ok(Lineup::empty(pool));
    }

    let mut vars = ProblemVariables::new();
    let picks: Vec<Variable> = pool.iter().map(|_| vars.add(variable().binary())).collect();

    let points: Expression = pool
        .iter()
        .zip(&picks)
        .map(|(r, &x)| r.projected_points * x)
        .sum();
    let salary: Expression = pool.iter().zip(&picks).map(|(r, &x)| r.salary * x).sum();
    let cap = salary_cap.as_f64();

    let mut model = vars
        .maximise(points)
        .using(default_solver)
        .with(constraint!(salary <= cap));
    let mut constraints = 1;

    for bound in &rules.position_bounds {
        let members: Vec<Variable> = pool
            .iter()
            .zip(&picks)
            .filter(|(r, _)| bound.admits(r))
            .map(|(_, &x)| x)
            .collect();
        // An empty group with min 0 is always satisfied.
        if members.is_empty() {
            continue;
        }
        let count: Expression = members.into_iter().sum();
        let min = bound.min as f64;

        if bound.is_exact() {
            model = model.with(constraint!(count == min));
            constraints += 1;
            continue;
        }
        if bound.min > 0 {
            model = model.with(constraint!(count.clone() >= min));
            constraints += 1;
        }
        if let Some(max) = bound.max {
            let max = max as f64;
            model = model.with(constraint!(count <= max));
            constraints += 1;
        }
    }

    if let Some(size) = rules.roster_size {
        let total: Expression = picks.iter().copied().sum();
        let size = size as f64;
        model = model.with(constraint!(total == size));
        constraints += 1;
    }

    debug!(
        league = %rules.league,
        variables = picks.len(),
        constraints,
        salary_cap = cap,
        "solving lineup model"
    );

    let solution = match model.solve() {
        Ok(solution) => solution,
        Err(ResolutionError::Infeasible) => {
            debug!(league = %rules.league, "lineup model is infeasible");
            return Ok(Lineup::empty(pool));
        }
        Err(e) => {
            return Err(LineupError::Solver {
                message: e.to_string(),
            })
        }
    };

    let selected: Vec<usize> = picks
        .iter()
        .enumerate()
        .filter(|(_, &x)| solution.value(x) > 0.5)
        .map(|(i, _)| i)
        .collect();
    let lineup = Lineup { pool, selected };

    validate(&lineup, rules, cap)?;

    debug!(
        league = %rules.league,
        players = lineup.len(),
        points = lineup.total_points(),
        salary = lineup.total_salary(),
        "optimal lineup found"
    );

    Ok(lineup)
}

/// Reject a solver answer that breaks the rules or overspends the cap.
fn validate(lineup: &Lineup, rules: &RosterRules, salary_cap: f64) -> Result<()> {
    let salary = lineup.total_salary();
    if rules.is_satisfied_by(&lineup.records()) && salary <= salary_cap + 1e-6 {
        return Ok(());
    }
    warn!(
        league = %rules.league,
        players = lineup.len(),
        salary,
        "solver returned a lineup that breaks the roster rules"
    );
    Err(LineupError::Solver {
        message: format!(
            "{} lineup of {} players at ${} breaks the roster rules or the ${} cap",
            rules.league,
            lineup.len(),
            salary,
            salary_cap
        ),
    })
}

/// Cheap counting checks that prove infeasibility without a solve.
fn trivially_infeasible(pool: &[PlayerRecord], rules: &RosterRules) -> Option<String> {
    if let Some(size) = rules.roster_size {
        if pool.len() < size as usize {
            return Some(format!(
                "{} candidates for a roster of {}",
                pool.len(),
                size
            ));
        }
    }
    rules.position_bounds.iter().find_map(|bound| {
        let eligible = pool.iter().filter(|r| bound.admits(r)).count() as u32;
        (eligible < bound.min)
            .then(|| format!("{} eligible candidates for {}", eligible, bound))
    })
}
