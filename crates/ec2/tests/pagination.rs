use std::collections::HashMap;

use anyhow::Result;

use nimbus_ec2::operation::{DescribeInstancesRequest, DescribeInstancesResult};
use nimbus_ec2::types::{Filter, Instance, Reservation};
use nimbus_ec2::{PaginationError, Paginator, PaginatorConfig};
use nimbus_observability::{LogConfig, LogFormat};

/// In-memory stand-in for the remote service, keyed by continuation token.
struct FakeService {
    pages: HashMap<Option<String>, DescribeInstancesResult>,
    calls: Vec<DescribeInstancesRequest>,
}

impl FakeService {
    fn new(pages: Vec<(Option<&str>, Vec<&str>, Option<&str>)>) -> Self {
        let pages = pages
            .into_iter()
            .map(|(token, ids, next)| {
                let reservation = Reservation::builder()
                    .extend_instances(ids.into_iter().map(|id| Instance::builder().instance_id(id).build()))
                    .build();
                let result = DescribeInstancesResult::builder()
                    .reservations(reservation)
                    .set_next_token(next.map(str::to_string))
                    .build();
                (token.map(str::to_string), result)
            })
            .collect();
        Self { pages, calls: Vec::new() }
    }

    fn describe_instances(&mut self, request: &DescribeInstancesRequest) -> Result<DescribeInstancesResult> {
        self.calls.push(request.clone());
        let key = request.next_token().map(str::to_string);
        self.pages
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("InvalidNextToken: {key:?}"))
    }
}

fn instance_ids(reservations: &[Reservation]) -> Vec<String> {
    reservations
        .iter()
        .flat_map(|r| r.instances().unwrap_or_default())
        .filter_map(Instance::instance_id)
        .map(str::to_string)
        .collect()
}

fn init_logging() {
    nimbus_observability::init_with(
        &LogConfig::default()
            .with_format(LogFormat::Compact)
            .with_default_directive("nimbus_core=debug"),
    );
}

#[test]
fn walks_all_pages_and_keeps_the_filters() -> Result<()> {
    init_logging();
    let mut service = FakeService::new(vec![
        (None, vec!["i-1", "i-2"], Some("t1")),
        (Some("t1"), vec!["i-3"], Some("t2")),
        (Some("t2"), vec!["i-4"], None),
    ]);

    let request = DescribeInstancesRequest::builder()
        .filters(Filter::new("instance-state-name", ["running"]))
        .build();
    let config = PaginatorConfig::default().with_page_size(2);

    let reservations = Paginator::with_config(request, config, |req| service.describe_instances(req))
        .collect_items()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    assert_eq!(instance_ids(&reservations), ["i-1", "i-2", "i-3", "i-4"]);
    assert_eq!(service.calls.len(), 3);
    for call in &service.calls {
        assert_eq!(call.max_results(), Some(2));
        assert_eq!(call.filters().map(<[_]>::len), Some(1));
    }
    assert_eq!(service.calls[2].next_token(), Some("t2"));
    Ok(())
}

#[test]
fn service_errors_are_passed_through() {
    init_logging();
    let mut service = FakeService::new(vec![(None, vec!["i-1"], Some("gone"))]);

    let err = Paginator::new(DescribeInstancesRequest::default(), |req| service.describe_instances(req))
        .collect_items()
        .unwrap_err();

    match err {
        PaginationError::Fetch(e) => assert!(e.to_string().contains("InvalidNextToken")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn a_looping_service_is_detected() {
    init_logging();
    let mut service = FakeService::new(vec![
        (None, vec!["i-1"], Some("t1")),
        (Some("t1"), vec!["i-2"], Some("t1")),
    ]);

    let err = Paginator::new(DescribeInstancesRequest::default(), |req| service.describe_instances(req))
        .collect_items()
        .unwrap_err();
    assert!(matches!(err, PaginationError::RepeatedToken(ref t) if t == "t1"));
}
