use std::fmt;
use std::path::{Path, PathBuf};

/// File extension of graphs stored in Matrix Market format.
pub const MARKET_EXTENSION: &str = "mtx";

/// Suffix of the permutation file that ships with every reordered graph.
pub const PERMUTATION_SUFFIX: &str = "-perm.txt";

/// Datasets swept by default, in the order they are run.
const DATASETS: &[&str] = &[
    "ak2010",
    "delaunay_n10",
    "delaunay_n11",
    "delaunay_n12",
    "delaunay_n13",
    "delaunay_n14",
    "delaunay_n15",
    "delaunay_n16",
    "delaunay_n17",
    "delaunay_n18",
    "delaunay_n19",
    "delaunay_n20",
    "delaunay_n21",
    "delaunay_n22",
    "delaunay_n23",
    "delaunay_n24",
    "kron_g500-logn16",
    "kron_g500-logn17",
    "kron_g500-logn18",
    "kron_g500-logn19",
    "kron_g500-logn20",
    "kron_g500-logn21",
    "coAuthorsDBLP",
    "coAuthorsCiteseer",
    "coPapersDBLP",
    "coPapersCiteseer",
    "citationCiteseer",
    "preferentialAttachment",
    "soc-LiveJournal1",
    "soc-twitter-2010",
    "hollywood-2009",
    "soc-sinaweibo",
    "webbase-1M",
    "arabic-2005",
    "uk-2002",
    "uk-2005",
    "webbase-2001",
    "indochina-2004",
    "caidaRouterLevel",
    "belgium_osm",
    "netherlands_osm",
    "italy_osm",
    "luxembourg_osm",
    "great-britain_osm",
    "germany_osm",
    "asia_osm",
    "europe_osm",
    "road_usa",
    "road_central",
];

/// R-MAT graphs produced by the benchmark executable's built-in generator.
const SYNTHETIC: &[(&str, &str)] = &[
    ("rmat_n24_e16", "rmat --graph-scale=24 --graph-edgefactor=16"),
    ("rmat_n23_e32", "rmat --graph-scale=23 --graph-edgefactor=32"),
    ("rmat_n22_e64", "rmat --graph-scale=22 --graph-edgefactor=64"),
];

/// A named input of a benchmark sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    generator: Option<String>,
}

impl Dataset {
    /// A dataset read from `<root>/<name>/<name>.mtx`.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generator: None,
        }
    }

    /// A dataset created by the executable from the given generator
    /// arguments, e.g. `rmat --graph-scale=22 --graph-edgefactor=64`.
    pub fn generated(name: impl Into<String>, generator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generator: Some(generator.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generator(&self) -> Option<&str> {
        self.generator.as_deref()
    }

    /// Resolves the graph input of this dataset below the given root.
    ///
    /// Generated datasets ignore the root, so plain and reordered runs share
    /// the same generator arguments.
    pub fn graph_source(&self, root: &Path) -> GraphSource {
        match &self.generator {
            Some(generator) => GraphSource::Generator(generator.clone()),
            None => GraphSource::Market(
                root.join(&self.name)
                    .join(format!("{}.{MARKET_EXTENSION}", self.name)),
            ),
        }
    }

    pub fn permutation_path(&self, root: &Path) -> PathBuf {
        root.join(&self.name)
            .join(format!("{}{PERMUTATION_SUFFIX}", self.name))
    }
}

/// The graph argument handed to the benchmark executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    Market(PathBuf),
    Generator(String),
}

impl GraphSource {
    pub fn to_args(&self) -> Vec<String> {
        match self {
            GraphSource::Market(path) => {
                vec!["market".to_string(), path.display().to_string()]
            }
            GraphSource::Generator(generator) => {
                generator.split_whitespace().map(String::from).collect()
            }
        }
    }
}

impl fmt::Display for GraphSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphSource::Market(path) => write!(f, "market {}", path.display()),
            GraphSource::Generator(generator) => f.write_str(generator),
        }
    }
}

/// Datasets keyed by name, iterated in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    datasets: Vec<Dataset>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            datasets: Vec::new(),
        }
    }

    /// The Matrix Market datasets of the evaluation, in sweep order.
    pub fn standard() -> Self {
        DATASETS.iter().map(|name| Dataset::file(*name)).collect()
    }

    /// The R-MAT generator datasets.
    pub fn synthetic() -> Self {
        SYNTHETIC
            .iter()
            .map(|(name, generator)| Dataset::generated(*name, *generator))
            .collect()
    }

    /// Adds a dataset. A dataset with the same name is replaced in place.
    pub fn insert(&mut self, dataset: Dataset) {
        match self.datasets.iter_mut().find(|d| d.name == dataset.name) {
            Some(existing) => *existing = dataset,
            None => self.datasets.push(dataset),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }

    /// Keeps only the datasets for which the predicate returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Dataset) -> bool,
    {
        self.datasets.retain(|d| keep(d))
    }
}

impl FromIterator<Dataset> for Catalog {
    fn from_iter<T: IntoIterator<Item = Dataset>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<Dataset> for Catalog {
    fn extend<T: IntoIterator<Item = Dataset>>(&mut self, iter: T) {
        for dataset in iter {
            self.insert(dataset);
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Dataset;
    type IntoIter = std::slice::Iter<'a, Dataset>;

    fn into_iter(self) -> Self::IntoIter {
        self.datasets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_keeps_order() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.len(), DATASETS.len());
        assert_eq!(catalog.iter().next().unwrap().name(), "ak2010");
        assert_eq!(catalog.iter().last().unwrap().name(), "road_central");
        assert!(catalog.iter().all(|d| d.generator().is_none()));
    }

    #[test]
    fn insert_replaces_existing_name() {
        let mut catalog: Catalog = vec![Dataset::file("a"), Dataset::file("b")]
            .into_iter()
            .collect();

        catalog.insert(Dataset::generated("a", "rmat --graph-scale=10"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("a").unwrap().generator(),
            Some("rmat --graph-scale=10")
        );
        assert_eq!(
            catalog.iter().map(Dataset::name).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn retain_filters_by_name() {
        let mut catalog = Catalog::standard();
        catalog.retain(|d| d.name().starts_with("delaunay"));

        assert_eq!(catalog.len(), 15);
        assert!(catalog.get("ak2010").is_none());
    }

    #[test]
    fn default_catalog_is_empty() {
        assert!(Catalog::default().is_empty());
        assert_eq!(Catalog::default(), Catalog::new());
    }

    #[test]
    fn market_source_uses_dataset_directory() {
        let dataset = Dataset::file("ak2010");
        let source = dataset.graph_source(Path::new("/data/large"));

        assert_eq!(
            source,
            GraphSource::Market(PathBuf::from("/data/large/ak2010/ak2010.mtx"))
        );
        assert_eq!(source.to_string(), "market /data/large/ak2010/ak2010.mtx");
        assert_eq!(
            dataset.permutation_path(Path::new("/data/rcm")),
            PathBuf::from("/data/rcm/ak2010/ak2010-perm.txt")
        );
    }

    #[test]
    fn generator_source_ignores_root() {
        let catalog = Catalog::synthetic();
        let dataset = catalog.get("rmat_n22_e64").unwrap();
        let source = dataset.graph_source(Path::new("/data/large"));

        assert_eq!(
            source.to_args(),
            vec!["rmat", "--graph-scale=22", "--graph-edgefactor=64"]
        );
        assert_eq!(
            source.to_string(),
            "rmat --graph-scale=22 --graph-edgefactor=64"
        );
    }
}
