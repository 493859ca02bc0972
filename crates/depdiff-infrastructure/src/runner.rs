//! Run orchestration
//!
//! Ties configuration, taxonomy, registries and use cases together for the
//! two commands. Every input is loaded and every result computed before the
//! first output file is written, so a failing run leaves no partial output.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use depdiff_application::registry::{ComparatorConfig, resolve_comparator, resolve_format_adapter};
use depdiff_application::use_cases::{
    ComparisonReport, ComparisonSummary, DependencyReconciler, EntityMatcher, TypeCensus,
};
use depdiff_domain::entities::DependencyIndex;
use depdiff_domain::error::{Error, Result};
use depdiff_domain::ports::AdapterInput;
use depdiff_domain::value_objects::{CompareKind, Taxonomy, ToolKind};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::constants::{DEPENDENCY_FILE_SUFFIX, ENTITY_FILE_SUFFIX};
use crate::io::{load_dependencies, load_entities, load_equivalence, write_json};
use crate::taxonomy::load_taxonomy;

/// Parameters of one comparison
#[derive(Debug, Clone)]
pub struct CompareRequest {
    /// Tool of the left dataset
    pub left_tool: ToolKind,
    /// Canonical document of the left dataset
    pub left: PathBuf,
    /// Tool of the right dataset
    pub right_tool: ToolKind,
    /// Canonical document of the right dataset
    pub right: PathBuf,
    /// Entity matching or dependency reconciliation
    pub kind: CompareKind,
    /// Report destination
    pub output: PathBuf,
    /// `eq` pairs of an entity run, required for dependency runs
    pub equivalence: Option<PathBuf>,
}

/// Parameters of one native export conversion
#[derive(Debug, Clone)]
pub struct FormatRequest {
    /// Tool that produced the export
    pub tool: ToolKind,
    /// Native entity export
    pub entity_input: Option<PathBuf>,
    /// Native dependency export
    pub dependency_input: Option<PathBuf>,
    /// Project name written into the documents
    pub project: String,
    /// Directory receiving the canonical documents
    pub output_dir: PathBuf,
}

/// Files produced by a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOutcome {
    /// Written documents
    pub written: Vec<PathBuf>,
    /// Records converted with a degraded value
    pub warnings: Vec<String>,
}

/// Executes `compare` and `format` runs
#[derive(Debug, Clone)]
pub struct ComparisonRunner {
    config: AppConfig,
    taxonomy: Arc<Taxonomy>,
}

impl ComparisonRunner {
    /// Create a runner, loading the taxonomy selected by `config`
    pub fn new(config: AppConfig) -> Result<Self> {
        let taxonomy = load_taxonomy(&config.taxonomy)?;
        Ok(Self::with_taxonomy(config, taxonomy))
    }

    /// Create a runner with explicit taxonomy tables
    pub fn with_taxonomy(config: AppConfig, taxonomy: Taxonomy) -> Self {
        Self {
            config,
            taxonomy: Arc::new(taxonomy),
        }
    }

    /// Taxonomy used by this runner
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Run one comparison and write its report
    pub fn compare(&self, request: &CompareRequest) -> Result<ComparisonSummary> {
        info!(
            left = %request.left_tool,
            right = %request.right_tool,
            kind = %request.kind,
            "Starting comparison"
        );
        let (report, summary) = match request.kind {
            CompareKind::Entity => self.compare_entities(request)?,
            CompareKind::Dependency => self.compare_dependencies(request)?,
        };

        write_json(&request.output, &report)?;
        info!(output = %request.output.display(), %summary, "Comparison finished");
        Ok(summary)
    }

    fn compare_entities(
        &self,
        request: &CompareRequest,
    ) -> Result<(ComparisonReport, ComparisonSummary)> {
        let comparator_config =
            ComparatorConfig::new(request.left_tool, request.right_tool, Arc::clone(&self.taxonomy))
                .with_fuzzy(self.config.matcher.thresholds());
        let comparator = resolve_comparator(&comparator_config, CompareKind::Entity)?;

        let left = load_entities(&request.left, request.left_tool)?;
        let right = load_entities(&request.right, request.right_tool)?;

        let censuses = [
            TypeCensus::of_entities(
                request.left_tool,
                self.taxonomy.table(request.left_tool),
                &left.entity,
            ),
            TypeCensus::of_entities(
                request.right_tool,
                self.taxonomy.table(request.right_tool),
                &right.entity,
            ),
        ];
        censuses.iter().for_each(TypeCensus::log);

        let outcome = EntityMatcher::new(comparator)
            .with_options(self.config.matcher.options())
            .run(&left.entity, &right.entity);

        let report = ComparisonReport::Entity(outcome);
        let summary = report.summary().with_census(&censuses);
        Ok((report, summary))
    }

    fn compare_dependencies(
        &self,
        request: &CompareRequest,
    ) -> Result<(ComparisonReport, ComparisonSummary)> {
        let equivalence = request.equivalence.as_deref().ok_or_else(|| {
            Error::invalid_argument("A dependency comparison needs an equivalence file (--equivalence)")
        })?;

        let left = load_dependencies(&request.left, request.left_tool)?;
        let right = load_dependencies(&request.right, request.right_tool)?;
        let mapping = load_equivalence(equivalence, request.left_tool)?;
        if mapping.ambiguous_count() > 0 {
            warn!(
                ambiguous = mapping.ambiguous_count(),
                "Equivalence maps some left entities to several right entities"
            );
        }

        let left_table = self.taxonomy.table(request.left_tool);
        let right_table = self.taxonomy.table(request.right_tool);
        let censuses = [
            TypeCensus::of_dependencies(request.left_tool, left_table, &left.dependency),
            TypeCensus::of_dependencies(request.right_tool, right_table, &right.dependency),
        ];
        censuses.iter().for_each(TypeCensus::log);

        let left_index = DependencyIndex::group_by_source(request.left_tool.as_str(), left.dependency);
        let right_index =
            DependencyIndex::group_by_source(request.right_tool.as_str(), right.dependency);

        let reconciler = DependencyReconciler::new(self.config.reconcile.options()).with_tables(
            left_table.cloned().unwrap_or_default(),
            right_table.cloned().unwrap_or_default(),
        );
        let (outcome, stats) = reconciler.reconcile(&left_index, &right_index, &mapping);
        info!(
            left_sources = left_index.source_count(),
            left_edges = left_index.edge_count(),
            right_sources = right_index.source_count(),
            right_edges = right_index.edge_count(),
            mapped_sources = stats.mapped_sources,
            silent_counterparts = stats.silent_counterparts,
            dropped_edges = stats.dropped_edges,
            kind_mismatches = stats.kind_mismatches,
            "Dependencies reconciled"
        );

        let report = ComparisonReport::Dependency(outcome);
        let summary = report
            .summary()
            .with_ambiguous(mapping.ambiguous_count())
            .with_census(&censuses);
        Ok((report, summary))
    }

    /// Convert a native export into canonical documents
    pub fn format(&self, request: &FormatRequest) -> Result<FormatOutcome> {
        let adapter = resolve_format_adapter(request.tool)?;

        let mut input = AdapterInput::new(&request.project)
            .with_table(self.taxonomy.table(request.tool).cloned().unwrap_or_default());
        input.entity_input.clone_from(&request.entity_input);
        input.dependency_input.clone_from(&request.dependency_input);

        let converted = adapter.convert(&input)?;
        for warning in &converted.warnings {
            warn!(tool = %request.tool, "{warning}");
        }

        let mut written = Vec::new();
        if let Some(entities) = &converted.entities {
            let path = output_path(&request.output_dir, request.tool, &request.project, ENTITY_FILE_SUFFIX);
            write_json(&path, entities)?;
            written.push(path);
        }
        if let Some(dependencies) = &converted.dependencies {
            let path = output_path(
                &request.output_dir,
                request.tool,
                &request.project,
                DEPENDENCY_FILE_SUFFIX,
            );
            write_json(&path, dependencies)?;
            written.push(path);
        }

        info!(tool = %request.tool, files = written.len(), "Conversion finished");
        Ok(FormatOutcome {
            written,
            warnings: converted.warnings,
        })
    }
}

/// `<dir>/<tool>_<project>_<suffix>`
pub fn output_path(dir: &Path, tool: ToolKind, project: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{tool}_{project}_{suffix}"))
}
