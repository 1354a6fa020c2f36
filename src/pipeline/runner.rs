//! Pipeline runner — orchestrates stage execution per review.
//!
//! The [`AbsaPipeline`] holds the four collaborator implementations and
//! threads one review through segmentation, both extraction strategies,
//! sentiment annotation, and the ensemble merge, notifying an optional
//! [`PipelineObserver`] at each stage boundary.
//!
//! # Static dispatch
//!
//! `AbsaPipeline` is generic over its collaborators, so each concrete
//! combination monomorphizes into a unique type with no virtual calls on
//! the hot path.

use rayon::prelude::*;

use crate::ensemble::EnsembleMerger;
use crate::error::AbsaError;
use crate::graph::{NegationBindings, SentenceGraph};
use crate::nlp::{format_review, split_sentences};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    STAGE_ADJECTIVE_TARGETS, STAGE_ANNOTATE, STAGE_CLAUSE_CLUSTERS, STAGE_MERGE, STAGE_SEGMENT,
};
use crate::pipeline::traits::{DependencyParser, PolarityScorer, PosTagger, ValenceScorer};
use crate::sentiment::SentimentAnnotator;
use crate::strategy::{AdjectiveTargetExtractor, ClauseClusterer};
use crate::types::{AbsaConfig, AnnotatedPair, MergedRecord, RawPair};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Aspect-based sentiment extraction pipeline for one review at a time.
///
/// # Type parameters
///
/// | Param | Trait | Role |
/// |-------|-------|------|
/// | `P` | [`DependencyParser`] | per-sentence dependency parses |
/// | `T` | [`PosTagger`] | fine-grained tags for clause clustering |
/// | `A` | [`PolarityScorer`] | polarity + subjectivity |
/// | `B` | [`ValenceScorer`] | lexical compound valence |
#[derive(Debug, Clone)]
pub struct AbsaPipeline<P, T, A, B> {
    parser: P,
    tagger: T,
    polarity_scorer: A,
    valence_scorer: B,
    config: AbsaConfig,
    extractor: AdjectiveTargetExtractor,
    clusterer: ClauseClusterer,
}

impl<P, T, A, B> AbsaPipeline<P, T, A, B>
where
    P: DependencyParser,
    T: PosTagger,
    A: PolarityScorer,
    B: ValenceScorer,
{
    /// Build a pipeline with default configuration.
    pub fn new(parser: P, tagger: T, polarity_scorer: A, valence_scorer: B) -> Self {
        Self::with_config(parser, tagger, polarity_scorer, valence_scorer, AbsaConfig::default())
    }

    /// Build a pipeline with an explicit configuration.
    pub fn with_config(
        parser: P,
        tagger: T,
        polarity_scorer: A,
        valence_scorer: B,
        config: AbsaConfig,
    ) -> Self {
        let clusterer = ClauseClusterer::new(&config);
        Self {
            parser,
            tagger,
            polarity_scorer,
            valence_scorer,
            config,
            extractor: AdjectiveTargetExtractor::new(),
            clusterer,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &AbsaConfig {
        &self.config
    }

    /// Process one review into merged records.
    ///
    /// Fails only on [`AbsaError::EmptyReview`]; a review whose sentences
    /// all fail to parse degrades to an empty record list.
    pub fn run(&self, review: &str) -> Result<Vec<MergedRecord>, AbsaError> {
        self.run_with_observer(review, &mut NoopObserver)
    }

    /// Process one review, reporting stage boundaries to `observer`.
    pub fn run_with_observer(
        &self,
        review: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<MergedRecord>, AbsaError> {
        // Stage 0: format and segment. EmptyReview propagates before any
        // collaborator is invoked.
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let formatted = format_review(review)?;
        let sentences = split_sentences(&formatted);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(sentences.len())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&sentences);

        // Stage 1: adjective/adverb target extraction, per sentence.
        trace_stage!(STAGE_ADJECTIVE_TARGETS);
        observer.on_stage_start(STAGE_ADJECTIVE_TARGETS);
        let clock = StageClock::start();
        let (raw_a, skipped_a) = self.adjective_targets(&sentences);
        let report = StageReportBuilder::new(clock.elapsed())
            .pairs(raw_a.len())
            .skipped(skipped_a)
            .build();
        observer.on_stage_end(STAGE_ADJECTIVE_TARGETS, &report);
        observer.on_raw_pairs(STAGE_ADJECTIVE_TARGETS, &raw_a);

        // Stage 2: clause feature-description clustering, review-wide.
        trace_stage!(STAGE_CLAUSE_CLUSTERS);
        observer.on_stage_start(STAGE_CLAUSE_CLUSTERS);
        let clock = StageClock::start();
        let clause = self.clusterer.extract(&sentences, &self.tagger, &self.parser);
        let report = StageReportBuilder::new(clock.elapsed())
            .pairs(clause.pairs.len())
            .skipped(clause.skipped_parses)
            .build();
        observer.on_stage_end(STAGE_CLAUSE_CLUSTERS, &report);
        observer.on_raw_pairs(STAGE_CLAUSE_CLUSTERS, &clause.pairs);

        // Stage 3: sentiment annotation for both strategies' output.
        trace_stage!(STAGE_ANNOTATE);
        observer.on_stage_start(STAGE_ANNOTATE);
        let clock = StageClock::start();
        let annotator = SentimentAnnotator::new(&self.polarity_scorer, &self.valence_scorer);
        let mut annotated: Vec<AnnotatedPair> = annotator.annotate(raw_a);
        annotated.extend(annotator.annotate(clause.pairs));
        let report = StageReportBuilder::new(clock.elapsed())
            .pairs(annotated.len())
            .build();
        observer.on_stage_end(STAGE_ANNOTATE, &report);
        observer.on_annotated(&annotated);

        // Stage 4: ensemble merge.
        trace_stage!(STAGE_MERGE);
        observer.on_stage_start(STAGE_MERGE);
        let clock = StageClock::start();
        let records = EnsembleMerger::merge(annotated);
        let report = StageReportBuilder::new(clock.elapsed())
            .records(records.len())
            .build();
        observer.on_stage_end(STAGE_MERGE, &report);
        observer.on_records(&records);

        Ok(records)
    }

    /// Run the adjective/adverb extractor over every sentence. A failed
    /// or malformed parse contributes no nodes and no pairs for that
    /// sentence.
    fn adjective_targets(&self, sentences: &[String]) -> (Vec<RawPair>, usize) {
        let mut pairs = Vec::new();
        let mut skipped = 0;
        for sentence in sentences {
            match self
                .parser
                .parse(sentence)
                .and_then(SentenceGraph::from_nodes)
            {
                Ok(graph) => {
                    let negations = NegationBindings::from_graph(&graph);
                    pairs.extend(self.extractor.extract(&graph, &negations));
                }
                Err(_) => skipped += 1,
            }
        }
        (pairs, skipped)
    }
}

impl<P, T, A, B> AbsaPipeline<P, T, A, B>
where
    P: DependencyParser + Sync,
    T: PosTagger + Sync,
    A: PolarityScorer + Sync,
    B: ValenceScorer + Sync,
{
    /// Process a batch of reviews in parallel.
    ///
    /// Reviews share no mutable state, so they fan out across the rayon
    /// pool; each element of the output corresponds to the input at the
    /// same index.
    pub fn run_batch(&self, reviews: &[String]) -> Vec<Result<Vec<MergedRecord>, AbsaError>> {
        reviews.par_iter().map(|review| self.run(review)).collect()
    }
}
