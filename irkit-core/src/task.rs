extern crate log;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::{Document, ItemCollection, Query, Run, System};
use crate::Evaluator;

/// Holds the judgments and system runs of one evaluation campaign.
///
/// Runs are shared between the by-system and the by-query indices.  Registering a
/// run for a (system, query) pair that already has one replaces it, and the same
/// goes for ground truth.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    documents: ItemCollection<Document>,
    queries: ItemCollection<Query>,
    systems: ItemCollection<System>,
    ground_truths: BTreeMap<Query, Arc<Run>>,
    runs_by_system: BTreeMap<System, BTreeMap<Query, Arc<Run>>>,
    runs_by_query: BTreeMap<Query, BTreeMap<System, Arc<Run>>>,
}

impl Task {
    /// Creates an empty task
    pub fn new(name: &str) -> Self {
        Task {
            name: name.to_string(),
            documents: ItemCollection::new("Documents"),
            queries: ItemCollection::new("Queries"),
            systems: ItemCollection::new("Systems"),
            ground_truths: BTreeMap::new(),
            runs_by_system: BTreeMap::new(),
            runs_by_query: BTreeMap::new(),
        }
    }

    /// Name of the task
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documents seen so far
    pub fn documents(&self) -> &ItemCollection<Document> {
        &self.documents
    }

    /// Queries seen so far
    pub fn queries(&self) -> &ItemCollection<Query> {
        &self.queries
    }

    /// Systems seen so far
    pub fn systems(&self) -> &ItemCollection<System> {
        &self.systems
    }

    /// Interns a document id
    pub fn document(&mut self, id: &str) -> Document {
        self.documents.intern(id)
    }

    /// Interns a query id
    pub fn query(&mut self, id: &str) -> Query {
        self.queries.intern(id)
    }

    /// Interns a system id
    pub fn system(&mut self, id: &str) -> System {
        self.systems.intern(id)
    }

    /// Registers the ground truth of the run's query
    pub fn add_ground_truth(&mut self, run: Run) {
        let query = self.queries.intern(run.query().id());
        if self.ground_truths.insert(query, Arc::new(run)).is_some() {
            log::debug!("Replaced ground truth in task {}", self.name);
        }
    }

    /// Registers several ground truth runs
    pub fn add_ground_truths<I: IntoIterator<Item = Run>>(&mut self, runs: I) {
        for run in runs {
            self.add_ground_truth(run);
        }
    }

    /// Registers a system run under both its system and its query
    pub fn add_system_run(&mut self, run: Run) {
        let query = self.queries.intern(run.query().id());
        let system = self.systems.intern(run.system().id());
        let run = Arc::new(run);

        self.runs_by_system
            .entry(system.clone())
            .or_insert_with(BTreeMap::new)
            .insert(query.clone(), run.clone());

        let replaced = self
            .runs_by_query
            .entry(query.clone())
            .or_insert_with(BTreeMap::new)
            .insert(system.clone(), run);

        if replaced.is_some() {
            log::debug!("Replaced run of system {} for query {}", system, query);
        }
    }

    /// Registers several system runs
    pub fn add_system_runs<I: IntoIterator<Item = Run>>(&mut self, runs: I) {
        for run in runs {
            self.add_system_run(run);
        }
    }

    /// Ground truth for the query, if any
    pub fn ground_truth(&self, query: &Query) -> Option<&Run> {
        self.ground_truths.get(query).map(|r| r.as_ref())
    }

    /// Run of the system for the query, if any
    pub fn run(&self, system: &System, query: &Query) -> Option<&Run> {
        self.runs_by_system
            .get(system)
            .and_then(|runs| runs.get(query))
            .map(|r| r.as_ref())
    }

    /// Number of registered system runs
    pub fn num_runs(&self) -> usize {
        self.runs_by_system.values().map(|runs| runs.len()).sum()
    }

    /// Systems that have at least one run, ordered by id
    pub fn evaluated_systems(&self) -> impl Iterator<Item = &System> {
        self.runs_by_system.keys()
    }

    /// Queries that have at least one system run, ordered by id
    pub fn evaluated_queries(&self) -> impl Iterator<Item = &Query> {
        self.runs_by_query.keys()
    }

    fn score<E: Evaluator + ?Sized>(&self, run: &Run, evaluator: &E) -> Result<f64> {
        let ground_truth = self
            .ground_truth(run.query())
            .ok_or_else(|| Error::MissingGroundTruth(run.query().clone()))?;

        Ok(evaluator.evaluate(ground_truth, run))
    }

    /// Scores the run of `system` for `query`
    pub fn evaluate<E: Evaluator + ?Sized>(
        &self,
        system: &System,
        query: &Query,
        evaluator: &E,
    ) -> Result<f64> {
        let ground_truth = self
            .ground_truth(query)
            .ok_or_else(|| Error::MissingGroundTruth(query.clone()))?;

        let run = self.run(system, query).ok_or_else(|| Error::MissingRun {
            system: system.clone(),
            query: query.clone(),
        })?;

        Ok(evaluator.evaluate(ground_truth, run))
    }

    /// Scores every system that answered `query`
    pub fn evaluate_all_systems<E: Evaluator + ?Sized>(
        &self,
        query: &Query,
        evaluator: &E,
    ) -> Result<BTreeMap<System, f64>> {
        let runs = self
            .runs_by_query
            .get(query)
            .ok_or_else(|| Error::UnknownQuery(query.clone()))?;

        runs.iter()
            .map(|(system, run)| Ok((system.clone(), self.score(run, evaluator)?)))
            .collect()
    }

    /// Scores every query `system` answered
    pub fn evaluate_all_queries<E: Evaluator + ?Sized>(
        &self,
        system: &System,
        evaluator: &E,
    ) -> Result<BTreeMap<Query, f64>> {
        let runs = self
            .runs_by_system
            .get(system)
            .ok_or_else(|| Error::UnknownSystem(system.clone()))?;

        runs.iter()
            .map(|(query, run)| Ok((query.clone(), self.score(run, evaluator)?)))
            .collect()
    }

    /// Scores every registered run, grouped by system then query
    pub fn evaluate_all_systems_all_queries<E: Evaluator + ?Sized>(
        &self,
        evaluator: &E,
    ) -> Result<BTreeMap<System, BTreeMap<Query, f64>>> {
        self.runs_by_system
            .keys()
            .map(|system| Ok((system.clone(), self.evaluate_all_queries(system, evaluator)?)))
            .collect()
    }

    /// Scores every registered run, grouped by query then system
    pub fn evaluate_all_queries_all_systems<E: Evaluator + ?Sized>(
        &self,
        evaluator: &E,
    ) -> Result<BTreeMap<Query, BTreeMap<System, f64>>> {
        self.runs_by_query
            .keys()
            .map(|query| Ok((query.clone(), self.evaluate_all_systems(query, evaluator)?)))
            .collect()
    }
}

impl Default for Task {
    fn default() -> Self {
        Task::new("Unnamed")
    }
}
