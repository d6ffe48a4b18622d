//! AppContext - owner of the ports and the once-only caches.
//!
//! The model, the metadata store and the population index are each built at
//! most once per process, even when several requests race on first access.
//! A failed load is not cached, so the next request retries it. After
//! initialization the caches are read-only `Arc`s.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::domain::community::CommunityMetadataStore;
use crate::domain::foundation::CommunityError;
use crate::domain::population::PopulationIndex;
use crate::domain::survey::{ClusterAssignment, SurveyRecord, SurveyValidation};
use crate::ports::{ClusterAssigner, MetadataSource, ModelRepository, NarrativeService, SurveyDataset};

/// Shared application state handed to every handler.
pub struct AppContext {
    models: Arc<dyn ModelRepository>,
    model_name: String,
    dataset: Arc<dyn SurveyDataset>,
    metadata_source: Arc<dyn MetadataSource>,
    narrative: Arc<dyn NarrativeService>,
    model: OnceCell<Arc<dyn ClusterAssigner>>,
    metadata: OnceCell<Arc<CommunityMetadataStore>>,
    population: OnceCell<Arc<PopulationIndex>>,
}

impl AppContext {
    pub fn new(
        models: Arc<dyn ModelRepository>,
        model_name: impl Into<String>,
        dataset: Arc<dyn SurveyDataset>,
        metadata_source: Arc<dyn MetadataSource>,
        narrative: Arc<dyn NarrativeService>,
    ) -> Self {
        Self {
            models,
            model_name: model_name.into(),
            dataset,
            metadata_source,
            narrative,
            model: OnceCell::new(),
            metadata: OnceCell::new(),
            population: OnceCell::new(),
        }
    }

    pub fn narrative(&self) -> Arc<dyn NarrativeService> {
        Arc::clone(&self.narrative)
    }

    /// Returns true once model, metadata and population are all cached.
    pub fn is_warm(&self) -> bool {
        self.model.get().is_some() && self.metadata.get().is_some() && self.population.get().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Blocking loaders
    // ─────────────────────────────────────────────────────────────────────

    /// Loads (once) the pretrained cluster model.
    pub fn model_blocking(&self) -> Result<Arc<dyn ClusterAssigner>, CommunityError> {
        self.model
            .get_or_try_init(|| {
                let model = self.models.load(&self.model_name)?;
                tracing::info!(model = %self.model_name, "Cluster model cached");
                Ok::<_, CommunityError>(model)
            })
            .map(Arc::clone)
    }

    /// Loads (once) the community metadata store.
    pub fn metadata_blocking(&self) -> Result<Arc<CommunityMetadataStore>, CommunityError> {
        self.metadata
            .get_or_try_init(|| {
                let store = self.metadata_source.load()?;
                tracing::info!(communities = store.len(), "Community metadata cached");
                Ok::<_, CommunityError>(Arc::new(store))
            })
            .map(Arc::clone)
    }

    /// Loads (once) the labeled population.
    ///
    /// Missing dataset cells are imputed by the model before validation; a
    /// row that is still invalid fails the whole load with its 1-based row
    /// number.
    pub fn population_blocking(&self) -> Result<Arc<PopulationIndex>, CommunityError> {
        self.population
            .get_or_try_init(|| {
                let index = self.build_population()?;
                tracing::info!(
                    respondents = index.len(),
                    clusters = index.cluster_ids().len(),
                    "Population index cached"
                );
                Ok::<_, CommunityError>(Arc::new(index))
            })
            .map(Arc::clone)
    }

    /// Loads everything and checks every population cluster has metadata.
    pub fn warm_up_blocking(&self) -> Result<(), CommunityError> {
        let metadata = self.metadata_blocking()?;
        let population = self.population_blocking()?;
        metadata.ensure_covers(population.cluster_ids().iter())?;
        Ok(())
    }

    fn build_population(&self) -> Result<PopulationIndex, CommunityError> {
        let rows = self.dataset.read_all()?;
        let model = self.model_blocking()?;

        let mut records = Vec::with_capacity(rows.len());
        for (idx, answers) in rows.into_iter().enumerate() {
            match model.impute(answers).validate() {
                SurveyValidation::Valid(record) => records.push(record),
                SurveyValidation::Invalid(problems) => {
                    let detail = problems
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; ");
                    return Err(CommunityError::DataUnavailable(format!(
                        "dataset row {}: {}",
                        idx + 1,
                        detail
                    )));
                }
            }
        }

        let labels = model.assign(&records)?;
        PopulationIndex::from_labels(records, labels)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Async accessors (loads run on the blocking pool)
    // ─────────────────────────────────────────────────────────────────────

    pub async fn model(self: &Arc<Self>) -> Result<Arc<dyn ClusterAssigner>, CommunityError> {
        if let Some(model) = self.model.get() {
            return Ok(Arc::clone(model));
        }
        let ctx = Arc::clone(self);
        run_blocking(move || ctx.model_blocking()).await
    }

    pub async fn metadata(self: &Arc<Self>) -> Result<Arc<CommunityMetadataStore>, CommunityError> {
        if let Some(store) = self.metadata.get() {
            return Ok(Arc::clone(store));
        }
        let ctx = Arc::clone(self);
        run_blocking(move || ctx.metadata_blocking()).await
    }

    pub async fn population(self: &Arc<Self>) -> Result<Arc<PopulationIndex>, CommunityError> {
        if let Some(index) = self.population.get() {
            return Ok(Arc::clone(index));
        }
        let ctx = Arc::clone(self);
        run_blocking(move || ctx.population_blocking()).await
    }

    pub async fn warm_up(self: &Arc<Self>) -> Result<(), CommunityError> {
        let ctx = Arc::clone(self);
        run_blocking(move || ctx.warm_up_blocking()).await
    }

    /// Assigns one complete record to its cluster.
    pub async fn assign(
        self: &Arc<Self>,
        record: SurveyRecord,
    ) -> Result<ClusterAssignment, CommunityError> {
        let model = self.model().await?;
        let cluster_id = model
            .assign(std::slice::from_ref(&record))?
            .into_iter()
            .next()
            .ok_or_else(|| CommunityError::ModelUnavailable("model returned no label".to_string()))?;

        tracing::debug!(cluster = %cluster_id, "Submission assigned");
        Ok(ClusterAssignment::new(record, cluster_id))
    }
}

async fn run_blocking<T, F>(load: F) -> Result<T, CommunityError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, CommunityError> + Send + 'static,
{
    tokio::task::spawn_blocking(load)
        .await
        .map_err(|e| CommunityError::DataUnavailable(format!("loader task failed: {}", e)))?
}
