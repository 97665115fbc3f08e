use metrics::{describe_counter, describe_gauge, gauge};

pub fn component_info_metric(name: &'static str) {
    static NAME: &str = "gmprocess_component_info";

    describe_gauge!(NAME, "Basic information about the component");

    let git_rev = option_env!("GIT_VERSION").unwrap_or("unknown");
    gauge!(NAME, "component" => name, "git_version" => git_rev).set(1);
}

/// Registers descriptions for every counter emitted by the transform library.
pub fn describe_transform_metrics() {
    describe_counter!(
        names::TRACES_TRANSFORMED,
        metrics::Unit::Count,
        "Number of traces successfully transformed"
    );
    describe_counter!(
        names::STREAMS_TRANSFORMED,
        metrics::Unit::Count,
        "Number of streams successfully transformed"
    );
    describe_counter!(
        names::FAILURES,
        metrics::Unit::Count,
        "Number of failures encountered"
    );
}

pub mod names {
    use const_format::concatcp;

    pub const METRIC_NAME_PREFIX: &str = "gmprocess_";

    pub const FAILURES: &str = concatcp!(METRIC_NAME_PREFIX, "failures");
    pub const STREAMS_TRANSFORMED: &str = concatcp!(METRIC_NAME_PREFIX, "streams_transformed");
    pub const TRACES_TRANSFORMED: &str = concatcp!(METRIC_NAME_PREFIX, "traces_transformed");
}

pub mod transform_kind {
    // Label building function
    pub fn get_label(transform: &'static str) -> (&'static str, &'static str) {
        ("transform", transform)
    }
}

pub mod failures {
    #[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
    pub enum FailureKind {
        EmptyInput,
        InvalidData,
        InvalidParameter,
        MissingParameter,
    }

    // Label building function
    pub fn get_label(failure_kind: FailureKind) -> (&'static str, &'static str) {
        (
            "failure_kind",
            match failure_kind {
                FailureKind::EmptyInput => "empty_input",
                FailureKind::InvalidData => "invalid_data",
                FailureKind::InvalidParameter => "invalid_parameter",
                FailureKind::MissingParameter => "missing_parameter",
            },
        )
    }
}
