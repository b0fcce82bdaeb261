//! Instance construction from weighted city-name pairs.

use std::collections::HashMap;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::tabu::{TabuConfig, TabuResult, TabuRunner};
use crate::tour::Tour;

/// A validated instance: city names plus their distance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct TspInstance {
    names: Vec<String>,
    matrix: DistanceMatrix,
}

impl TspInstance {
    pub fn builder() -> InstanceBuilder {
        InstanceBuilder::new()
    }

    /// Builds an instance from a nested `from -> [(to, weight)]` table.
    ///
    /// Each pair may appear once or in both directions; both directions
    /// must then agree.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_tabu::instance::TspInstance;
    ///
    /// let instance = TspInstance::from_table([
    ///     ("A", vec![("B", 1.0), ("C", 4.0)]),
    ///     ("B", vec![("C", 2.0)]),
    /// ])
    /// .unwrap();
    /// assert_eq!(instance.len(), 3);
    /// assert_eq!(instance.index_of("C"), Some(2));
    /// ```
    pub fn from_table<I, E, S, T>(table: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, E)>,
        E: IntoIterator<Item = (T, f64)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut builder = InstanceBuilder::new();
        for (from, row) in table {
            builder.add_city(from.as_ref());
            for (to, weight) in row {
                builder.add_edge(from.as_ref(), to.as_ref(), weight)?;
            }
        }
        builder.build()
    }

    /// The five-city road network of Norte de Santander, in kilometres.
    pub fn sample() -> Self {
        let mut builder = InstanceBuilder::new();
        let edges = [
            ("Ocaña", "Cúcuta", 200.0),
            ("Ocaña", "Pamplona", 240.0),
            ("Ocaña", "Tibú", 150.0),
            ("Ocaña", "Ábrego", 50.0),
            ("Cúcuta", "Pamplona", 75.0),
            ("Cúcuta", "Tibú", 120.0),
            ("Cúcuta", "Ábrego", 230.0),
            ("Pamplona", "Tibú", 190.0),
            ("Pamplona", "Ábrego", 270.0),
            ("Tibú", "Ábrego", 170.0),
        ];
        for (a, b, w) in edges {
            builder
                .add_edge(a, b, w)
                .expect("sample edges are listed once");
        }
        builder.build().expect("sample instance is complete")
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Weight between two named cities.
    pub fn distance(&self, a: &str, b: &str) -> Result<f64> {
        let i = self
            .index_of(a)
            .ok_or_else(|| TspError::UnknownCity(a.to_string()))?;
        let j = self
            .index_of(b)
            .ok_or_else(|| TspError::UnknownCity(b.to_string()))?;
        Ok(self.matrix.get(i, j))
    }

    /// City names along `tour`, in visiting order.
    pub fn route<'a>(&'a self, tour: &Tour) -> Vec<&'a str> {
        tour.as_slice()
            .iter()
            .filter_map(|&i| self.name(i))
            .collect()
    }

    /// Runs Tabu Search on this instance.
    pub fn solve(&self, config: &TabuConfig) -> Result<TabuResult> {
        TabuRunner::run(&self.matrix, config)
    }
}

/// Serializable edge-list form of an instance.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceSpec {
    /// `(from, to, weight)` triples.
    pub edges: Vec<(String, String, f64)>,
}

impl TryFrom<InstanceSpec> for TspInstance {
    type Error = TspError;

    fn try_from(spec: InstanceSpec) -> Result<Self> {
        let mut builder = InstanceBuilder::new();
        for (a, b, w) in &spec.edges {
            builder.add_edge(a, b, *w)?;
        }
        builder.build()
    }
}

/// Incremental builder over named, weighted edges.
#[derive(Debug, Clone, Default)]
pub struct InstanceBuilder {
    names: Vec<String>,
    index: HashMap<String, usize>,
    weights: HashMap<(usize, usize), f64>,
}

impl InstanceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a city, returning its index.
    pub fn add_city(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        i
    }

    /// Adds the undirected edge `a - b`.
    ///
    /// Self-loops are ignored. Repeating a pair with a different weight is
    /// an [`AsymmetricWeight`](TspError::AsymmetricWeight) error.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        let i = self.add_city(a);
        let j = self.add_city(b);
        if i == j {
            return Ok(());
        }
        let key = (i.min(j), i.max(j));
        match self.weights.get(&key) {
            Some(&existing) if existing != weight => Err(TspError::AsymmetricWeight {
                a: a.to_string(),
                b: b.to_string(),
                forward: existing,
                backward: weight,
            }),
            _ => {
                self.weights.insert(key, weight);
                Ok(())
            }
        }
    }

    /// Validates completeness and builds the instance.
    pub fn build(self) -> Result<TspInstance> {
        let n = self.names.len();
        if n < 3 {
            return Err(TspError::TooFewCities { found: n });
        }

        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let w = *self
                    .weights
                    .get(&(i, j))
                    .ok_or_else(|| TspError::MissingEdge {
                        a: self.names[i].clone(),
                        b: self.names[j].clone(),
                    })?;
                rows[i][j] = w;
                rows[j][i] = w;
            }
        }

        let names = self.names;
        let matrix = DistanceMatrix::from_rows_labeled(rows, |i| names[i].clone())?;
        Ok(TspInstance { names, matrix })
    }
}
