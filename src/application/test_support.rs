//! In-memory port doubles shared by the application tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::community::{CommunityMetadata, CommunityMetadataStore};
use crate::domain::foundation::{ClusterId, CommunityError};
use crate::domain::narrative::NarrativeRequest;
use crate::domain::survey::{SurveyAnswers, SurveyAttribute, SurveyRecord};
use crate::ports::{
    ApiKey, AssignmentError, ClusterAssigner, DatasetError, MetadataError, MetadataSource,
    ModelRepository, NarrativeService, SurveyDataset,
};
use secrecy::ExposeSecret;

/// Complete answers with the given age bracket.
pub fn answers(age: &str) -> SurveyAnswers {
    SurveyAnswers::default()
        .with(SurveyAttribute::Age, age)
        .with(SurveyAttribute::EduLevel, "Wyższe")
        .with(SurveyAttribute::FavAnimals, "Psy")
        .with(SurveyAttribute::FavPlace, "W górach")
        .with(SurveyAttribute::Gender, "Kobieta")
}

pub fn cluster(label: &str) -> ClusterId {
    ClusterId::new(label).unwrap()
}

/// Labels records `A`, `B`, `A`, ... by position and counts `assign` calls.
pub struct CountingAssigner {
    calls: AtomicUsize,
    fixed: Option<ClusterId>,
    imputation: Vec<(SurveyAttribute, String)>,
}

impl CountingAssigner {
    pub fn alternating() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fixed: None,
            imputation: Vec::new(),
        }
    }

    /// Always answers with `label`.
    pub fn fixed(label: &str) -> Self {
        Self {
            fixed: Some(cluster(label)),
            ..Self::alternating()
        }
    }

    pub fn imputing(mut self, attribute: SurveyAttribute, label: &str) -> Self {
        self.imputation.push((attribute, label.to_string()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ClusterAssigner for CountingAssigner {
    fn assign(&self, records: &[SurveyRecord]) -> Result<Vec<ClusterId>, AssignmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(records
            .iter()
            .enumerate()
            .map(|(idx, _)| match &self.fixed {
                Some(id) => id.clone(),
                None if idx % 2 == 0 => cluster("A"),
                None => cluster("B"),
            })
            .collect())
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

/// Serves one assigner under any name, or nothing at all.
pub struct StaticModels {
    assigner: Option<Arc<CountingAssigner>>,
    loads: AtomicUsize,
}

impl StaticModels {
    pub fn new(assigner: Arc<CountingAssigner>) -> Self {
        Self {
            assigner: Some(assigner),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            assigner: None,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ModelRepository for StaticModels {
    fn load(&self, name: &str) -> Result<Arc<dyn ClusterAssigner>, AssignmentError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match &self.assigner {
            Some(assigner) => Ok(Arc::clone(assigner) as Arc<dyn ClusterAssigner>),
            None => Err(AssignmentError::NotFound(name.to_string())),
        }
    }
}

/// Fixed dataset rows; clones share the read counter.
#[derive(Clone)]
pub struct StaticDataset {
    rows: Vec<SurveyAnswers>,
    reads: Arc<AtomicUsize>,
    failures_left: Arc<AtomicUsize>,
}

impl StaticDataset {
    pub fn new(rows: Vec<SurveyAnswers>) -> Self {
        Self {
            rows,
            reads: Arc::new(AtomicUsize::new(0)),
            failures_left: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fails the first read with an I/O error.
    pub fn failing_once(rows: Vec<SurveyAnswers>) -> Self {
        let dataset = Self::new(rows);
        dataset.failures_left.store(1, Ordering::SeqCst);
        dataset
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl SurveyDataset for StaticDataset {
    fn read_all(&self) -> Result<Vec<SurveyAnswers>, DatasetError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failed {
            return Err(DatasetError::Io("disk unplugged".to_string()));
        }
        Ok(self.rows.clone())
    }
}

/// Metadata for a fixed set of cluster labels.
pub struct StaticMetadata {
    store: CommunityMetadataStore,
}

impl StaticMetadata {
    pub fn covering(labels: &[&str]) -> Self {
        Self {
            store: labels
                .iter()
                .map(|label| {
                    (
                        cluster(label),
                        CommunityMetadata::new(
                            format!("Community {}", label),
                            format!("Members of {}", label),
                        ),
                    )
                })
                .collect(),
        }
    }
}

impl MetadataSource for StaticMetadata {
    fn load(&self) -> Result<CommunityMetadataStore, MetadataError> {
        Ok(self.store.clone())
    }
}

/// Narrative double that accepts or rejects every key and records calls.
pub struct StubNarrative {
    accept: bool,
    verifications: AtomicUsize,
    generated: Mutex<Vec<(String, NarrativeRequest)>>,
}

impl StubNarrative {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            verifications: AtomicUsize::new(0),
            generated: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept: false,
            ..Self::accepting()
        }
    }

    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }

    pub fn generated(&self) -> Vec<(String, NarrativeRequest)> {
        self.generated.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrativeService for StubNarrative {
    async fn verify_credential(&self, _api_key: &ApiKey) -> Result<(), CommunityError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        if self.accept {
            Ok(())
        } else {
            Err(CommunityError::CredentialInvalid)
        }
    }

    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &NarrativeRequest,
    ) -> Result<String, CommunityError> {
        if !self.accept {
            return Err(CommunityError::CredentialInvalid);
        }
        self.generated
            .lock()
            .unwrap()
            .push((api_key.expose_secret().clone(), request.clone()));
        Ok(format!("Plan for {}", request.prompt.len()))
    }
}
