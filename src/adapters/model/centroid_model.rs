//! Nearest-centroid cluster model loaded from a JSON artifact.
//!
//! # Artifact Format
//!
//! ```text
//! {model_dir}/{name}.json
//! {
//!   "name": "welcome_survey_clustering_pipeline_v2",
//!   "imputation": { "gender": "Mężczyzna" },
//!   "clusters": [
//!     { "id": "Cluster 0", "centroid": { "age=25-34": 0.61, "gender=Mężczyzna": 0.9 } }
//!   ]
//! }
//! ```
//!
//! Records are one-hot encoded as `attribute=label` keys. A record goes to
//! the centroid with the smallest squared Euclidean distance; ties go to the
//! cluster listed first.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::foundation::ClusterId;
use crate::domain::survey::{SurveyAnswers, SurveyAttribute, SurveyRecord};
use crate::ports::{AssignmentError, ClusterAssigner, ModelRepository};

/// Loads `<name>.json` artifacts from a directory.
#[derive(Debug, Clone)]
pub struct FileModelRepository {
    model_dir: PathBuf,
}

impl FileModelRepository {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
        }
    }

    /// Returns the artifact path for a model name.
    fn artifact_path(&self, name: &str) -> PathBuf {
        self.model_dir.join(format!("{}.json", name))
    }
}

impl ModelRepository for FileModelRepository {
    fn load(&self, name: &str) -> Result<Arc<dyn ClusterAssigner>, AssignmentError> {
        if name.trim().is_empty() || name.contains(['/', '\\']) {
            return Err(AssignmentError::NotFound(name.to_string()));
        }

        let path = self.artifact_path(name);
        let model = CentroidClusterModel::from_file(&path)?;
        tracing::info!(
            model = %model.name,
            clusters = model.clusters.len(),
            path = %path.display(),
            "Cluster model loaded"
        );
        Ok(Arc::new(model))
    }
}

/// A centroid per cluster plus the imputation table for dataset rows.
#[derive(Debug, Clone)]
pub struct CentroidClusterModel {
    name: String,
    imputation: Vec<(SurveyAttribute, String)>,
    clusters: Vec<Centroid>,
}

#[derive(Debug, Clone)]
struct Centroid {
    id: ClusterId,
    weights: HashMap<String, f64>,
}

impl CentroidClusterModel {
    /// Reads and validates an artifact file.
    pub fn from_file(path: &Path) -> Result<Self, AssignmentError> {
        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AssignmentError::NotFound(path.display().to_string()),
            _ => AssignmentError::malformed(format!("{}: {}", path.display(), e)),
        })?;
        Self::from_json(&raw)
    }

    /// Parses and validates an artifact document.
    pub fn from_json(raw: &str) -> Result<Self, AssignmentError> {
        let artifact: ModelArtifact =
            serde_json::from_str(raw).map_err(|e| AssignmentError::malformed(e.to_string()))?;
        Self::try_from(artifact)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cluster ids in artifact order.
    pub fn cluster_ids(&self) -> Vec<ClusterId> {
        self.clusters.iter().map(|c| c.id.clone()).collect()
    }

    fn nearest(&self, record: &SurveyRecord) -> &ClusterId {
        let encoded = encode(record);
        let mut best = &self.clusters[0];
        let mut best_distance = best.distance(&encoded);

        for candidate in &self.clusters[1..] {
            let distance = candidate.distance(&encoded);
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        &best.id
    }
}

impl ClusterAssigner for CentroidClusterModel {
    fn assign(&self, records: &[SurveyRecord]) -> Result<Vec<ClusterId>, AssignmentError> {
        let labels: Vec<ClusterId> = records.iter().map(|r| self.nearest(r).clone()).collect();
        tracing::debug!(records = records.len(), model = %self.name, "Records assigned");
        Ok(labels)
    }

    fn impute(&self, mut answers: SurveyAnswers) -> SurveyAnswers {
        for (attribute, label) in &self.imputation {
            if answers.get(*attribute).is_none() {
                answers.set(*attribute, label.clone());
            }
        }
        answers
    }
}

impl Centroid {
    /// Squared Euclidean distance to a one-hot encoded record.
    fn distance(&self, encoded: &HashSet<String>) -> f64 {
        let off_record: f64 = self
            .weights
            .iter()
            .filter(|(key, _)| !encoded.contains(*key))
            .map(|(_, w)| w * w)
            .sum();
        let on_record: f64 = encoded
            .iter()
            .map(|key| {
                let w = self.weights.get(key).copied().unwrap_or(0.0);
                (1.0 - w) * (1.0 - w)
            })
            .sum();
        off_record + on_record
    }
}

fn feature_key(attribute: SurveyAttribute, label: &str) -> String {
    format!("{}={}", attribute.name(), label)
}

fn encode(record: &SurveyRecord) -> HashSet<String> {
    SurveyAttribute::all()
        .iter()
        .map(|attr| feature_key(*attr, record.label(*attr)))
        .collect()
}

/// Checks that a centroid key names a known attribute and label.
fn validate_feature(key: &str) -> Result<(), AssignmentError> {
    let (attribute, label) = key
        .split_once('=')
        .ok_or_else(|| AssignmentError::malformed(format!("feature '{}' is not attribute=label", key)))?;
    let attribute: SurveyAttribute = attribute
        .parse()
        .map_err(|_| AssignmentError::malformed(format!("feature '{}' has unknown attribute", key)))?;
    attribute
        .label_rank(label)
        .map(|_| ())
        .ok_or_else(|| AssignmentError::malformed(format!("feature '{}' has unknown label", key)))
}

#[derive(Debug, Deserialize)]
struct ModelArtifact {
    name: String,
    #[serde(default)]
    imputation: HashMap<String, String>,
    clusters: Vec<ClusterEntry>,
}

#[derive(Debug, Deserialize)]
struct ClusterEntry {
    id: ClusterId,
    centroid: HashMap<String, f64>,
}

impl TryFrom<ModelArtifact> for CentroidClusterModel {
    type Error = AssignmentError;

    fn try_from(artifact: ModelArtifact) -> Result<Self, Self::Error> {
        if artifact.clusters.is_empty() {
            return Err(AssignmentError::malformed(format!(
                "model '{}' has no clusters",
                artifact.name
            )));
        }

        let mut seen = HashSet::new();
        let mut clusters = Vec::with_capacity(artifact.clusters.len());
        for entry in artifact.clusters {
            if !seen.insert(entry.id.clone()) {
                return Err(AssignmentError::malformed(format!(
                    "cluster '{}' is listed twice",
                    entry.id
                )));
            }
            for (key, weight) in &entry.centroid {
                validate_feature(key)?;
                if !weight.is_finite() {
                    return Err(AssignmentError::malformed(format!(
                        "feature '{}' of cluster '{}' is not finite",
                        key, entry.id
                    )));
                }
            }
            clusters.push(Centroid {
                id: entry.id,
                weights: entry.centroid,
            });
        }

        let mut imputation = Vec::with_capacity(artifact.imputation.len());
        for (attribute, label) in artifact.imputation {
            let parsed: SurveyAttribute = attribute.parse().map_err(|_| {
                AssignmentError::malformed(format!("imputation for unknown attribute '{}'", attribute))
            })?;
            validate_feature(&feature_key(parsed, &label))?;
            imputation.push((parsed, label));
        }
        imputation.sort_by_key(|(attribute, _)| *attribute);

        Ok(Self {
            name: artifact.name,
            imputation,
            clusters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::{AgeBracket, EducationLevel, FavouriteAnimals, FavouritePlace, Gender};
    use std::fs;
    use tempfile::TempDir;

    const ARTIFACT: &str = r#"{
        "name": "test_model",
        "imputation": { "gender": "Kobieta", "edu_level": "Wyższe" },
        "clusters": [
            { "id": "Cluster 0", "centroid": { "fav_place=W górach": 1.0, "fav_animals=Psy": 1.0 } },
            { "id": "Cluster 1", "centroid": { "fav_place=Nad wodą": 1.0, "fav_animals=Koty": 1.0 } }
        ]
    }"#;

    fn record(animals: FavouriteAnimals, place: FavouritePlace) -> SurveyRecord {
        SurveyRecord::new(
            AgeBracket::From25To34,
            EducationLevel::Higher,
            animals,
            place,
            Gender::Female,
        )
    }

    fn repository_with(name: &str, content: &str) -> (TempDir, FileModelRepository) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(format!("{}.json", name)), content).unwrap();
        let repo = FileModelRepository::new(dir.path());
        (dir, repo)
    }

    #[test]
    fn assigns_nearest_centroid() {
        let (_dir, repo) = repository_with("test_model", ARTIFACT);
        let model = repo.load("test_model").unwrap();

        let labels = model
            .assign(&[
                record(FavouriteAnimals::Dogs, FavouritePlace::InTheMountains),
                record(FavouriteAnimals::Cats, FavouritePlace::ByTheWater),
            ])
            .unwrap();

        assert_eq!(labels[0].as_str(), "Cluster 0");
        assert_eq!(labels[1].as_str(), "Cluster 1");
    }

    #[test]
    fn assignment_is_deterministic() {
        let model = CentroidClusterModel::from_json(ARTIFACT).unwrap();
        let records = vec![record(FavouriteAnimals::Other, FavouritePlace::InTheForest); 4];

        assert_eq!(model.assign(&records).unwrap(), model.assign(&records).unwrap());
    }

    #[test]
    fn ties_go_to_first_listed_cluster() {
        let model = CentroidClusterModel::from_json(ARTIFACT).unwrap();
        // Equidistant: shares one feature with each centroid.
        let labels = model
            .assign(&[record(FavouriteAnimals::Dogs, FavouritePlace::ByTheWater)])
            .unwrap();
        assert_eq!(labels[0].as_str(), "Cluster 0");
    }

    #[test]
    fn empty_batch_yields_no_labels() {
        let model = CentroidClusterModel::from_json(ARTIFACT).unwrap();
        assert!(model.assign(&[]).unwrap().is_empty());
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = FileModelRepository::new(dir.path());
        assert!(matches!(repo.load("absent"), Err(AssignmentError::NotFound(_))));
    }

    #[test]
    fn path_like_names_are_refused() {
        let (_dir, repo) = repository_with("test_model", ARTIFACT);
        assert!(matches!(repo.load("../test_model"), Err(AssignmentError::NotFound(_))));
    }

    #[test]
    fn zero_clusters_are_rejected() {
        let err = CentroidClusterModel::from_json(r#"{"name": "x", "clusters": []}"#).unwrap_err();
        assert!(matches!(err, AssignmentError::Malformed(_)));
    }

    #[test]
    fn unknown_features_are_rejected() {
        let raw = r#"{"name": "x", "clusters": [{"id": "A", "centroid": {"height=tall": 1.0}}]}"#;
        assert!(CentroidClusterModel::from_json(raw).is_err());

        let raw = r#"{"name": "x", "clusters": [{"id": "A", "centroid": {"gender=Robot": 1.0}}]}"#;
        assert!(CentroidClusterModel::from_json(raw).is_err());
    }

    #[test]
    fn duplicate_clusters_are_rejected() {
        let raw = r#"{"name": "x", "clusters": [
            {"id": "A", "centroid": {}}, {"id": "A", "centroid": {}}
        ]}"#;
        assert!(CentroidClusterModel::from_json(raw).is_err());
    }

    #[test]
    fn garbage_is_malformed() {
        let (_dir, repo) = repository_with("broken", "not json");
        assert!(matches!(repo.load("broken"), Err(AssignmentError::Malformed(_))));
    }

    #[test]
    fn impute_fills_only_missing_answers() {
        let model = CentroidClusterModel::from_json(ARTIFACT).unwrap();
        let answers = SurveyAnswers::default()
            .with(SurveyAttribute::Gender, "Mężczyzna")
            .with(SurveyAttribute::Age, "<18");

        let imputed = model.impute(answers);

        assert_eq!(imputed.get(SurveyAttribute::Gender), Some("Mężczyzna"));
        assert_eq!(imputed.get(SurveyAttribute::EduLevel), Some("Wyższe"));
        assert_eq!(imputed.get(SurveyAttribute::FavPlace), None);
    }

    #[test]
    fn exposes_cluster_ids_in_order() {
        let model = CentroidClusterModel::from_json(ARTIFACT).unwrap();
        let ids: Vec<_> = model.cluster_ids().iter().map(|c| c.to_string()).collect();
        assert_eq!(ids, vec!["Cluster 0", "Cluster 1"]);
        assert_eq!(model.name(), "test_model");
    }
}
