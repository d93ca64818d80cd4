use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::advice::{recommendations, summary};
use crate::clearance::ClearanceCheck;
use crate::config::ValidatorConfig;
use crate::error::{CheckError, Result};
use crate::input::{LayoutRequest, parse_furniture, validate};
use crate::logging::{LogLevel, event_with_fields, json_kv, json_str};
use crate::metrics::{SpaceMetrics, round2};
use crate::report::{ErrorDocument, LayoutReport};
use crate::tool::ToolArgs;

/// Stateless checker; one instance may serve any number of callers and threads.
#[derive(Debug, Clone, Default)]
pub struct LayoutValidator {
    config: ValidatorConfig,
}

impl LayoutValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run the full pipeline for one request.
    pub fn check(&self, request: &LayoutRequest) -> Result<LayoutReport> {
        let outcome = self.run(request);
        self.log_outcome(request, &outcome);
        outcome
    }

    /// Like [`check`](Self::check) but renders the outcome, success or failure, as JSON.
    pub fn evaluate(&self, request: &LayoutRequest) -> String {
        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| self.check(request))) {
            Ok(outcome) => outcome,
            Err(payload) => {
                let err = CheckError::Internal(panic_message(payload.as_ref()));
                // The sink may be what panicked; a second panic is dropped.
                let _ = panic::catch_unwind(AssertUnwindSafe(|| self.log_failure(request, &err)));
                Err(err)
            }
        };

        match outcome.and_then(|report| report.to_json()) {
            Ok(text) => text,
            Err(err) => {
                ErrorDocument::from_error(&err, request.room_length, request.room_width).to_json()
            }
        }
    }

    /// Entry point for tool-style callers passing a JSON argument object.
    pub fn invoke(&self, args_json: &str) -> String {
        match ToolArgs::from_json_str(args_json) {
            Ok(args) => self.evaluate(&args.into_request()),
            Err(err) => {
                let _ = panic::catch_unwind(AssertUnwindSafe(|| {
                    self.emit(
                        LogLevel::Warn,
                        "arguments_rejected",
                        vec![json_str("details", err.to_string())],
                    )
                }));
                // Room dimensions are unknown here; the arguments document does not use them.
                ErrorDocument::from_error(&err, 0.0, 0.0).to_json()
            }
        }
    }

    fn run(&self, request: &LayoutRequest) -> Result<LayoutReport> {
        let limits = &self.config.limits;

        let furniture = parse_furniture(&request.furniture, limits)?;
        let layout = validate(
            request.room_length,
            request.room_width,
            &request.room_type,
            &furniture,
            limits,
        )?;

        let metrics = SpaceMetrics::compute(&layout.room, &layout.furniture);
        if !metrics.is_finite() {
            return Err(CheckError::Internal(
                "space metrics are not finite".to_string(),
            ));
        }

        let check = ClearanceCheck::run(&layout.room, &layout.furniture, limits);
        let advice = recommendations(&layout.room, metrics.open_space_percent, &check.issues, limits);
        let verdict = summary(
            check.layout_valid(),
            metrics.open_space_percent,
            check.issues.len(),
        );

        Ok(LayoutReport::assemble(
            &layout.room,
            &layout.furniture,
            metrics,
            check,
            advice,
            verdict,
        ))
    }

    fn log_outcome(&self, request: &LayoutRequest, outcome: &Result<LayoutReport>) {
        let Some(logger) = &self.config.logger else {
            return;
        };
        match outcome {
            Ok(report) => {
                let _ = logger.log_event(report.metrics.to_log_event(&self.config.log_target));
                self.emit(
                    LogLevel::Info,
                    "layout_checked",
                    vec![
                        json_str("request", request.fingerprint()),
                        json_str("room_type", request.room_type.as_str()),
                        json_kv("pieces", report.furniture_analysis.total_pieces),
                        json_kv(
                            "open_space_percent",
                            round2(report.metrics.open_space_percent),
                        ),
                        json_str("rating", report.rating().label()),
                        json_kv("layout_valid", report.layout_valid),
                        json_kv("issues", report.issues.len()),
                    ],
                );
            }
            Err(err) => self.log_failure(request, err),
        }
    }

    fn log_failure(&self, request: &LayoutRequest, err: &CheckError) {
        if self.config.logger.is_none() {
            return;
        }
        let fingerprint = json_str("request", request.fingerprint());
        match err {
            CheckError::Invalid(errors) => self.emit(
                LogLevel::Warn,
                "input_rejected",
                vec![fingerprint, json_kv("errors", errors.len())],
            ),
            CheckError::Parse { source, .. } => self.emit(
                LogLevel::Warn,
                "furniture_parse_failed",
                vec![
                    fingerprint,
                    json_str("details", source.to_string()),
                    json_kv("line", source.line()),
                    json_kv("column", source.column()),
                ],
            ),
            CheckError::Arguments(source) => self.emit(
                LogLevel::Warn,
                "arguments_rejected",
                vec![fingerprint, json_str("details", source.to_string())],
            ),
            CheckError::Internal(message) => self.emit(
                LogLevel::Error,
                "internal_fault",
                vec![
                    fingerprint,
                    json_str("kind", err.kind()),
                    json_str("message", message.as_str()),
                ],
            ),
        }
    }

    fn emit(&self, level: LogLevel, message: &str, fields: Vec<(String, serde_json::Value)>) {
        if let Some(logger) = &self.config.logger {
            let event = event_with_fields(level, &self.config.log_target, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unexpected panic".to_string()
    }
}
