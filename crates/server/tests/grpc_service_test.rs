//! gRPC adapter integration tests
//!
//! Exercises the tonic service implementation directly, without a
//! network listener, over the same doubles as the REST tests.

mod helpers;

use calcd_proto::{AddRequest, CalculatorService, DivideRequest};
use calcd_server::grpc::CalculatorGrpcService;
use tonic::{Code, Request};

use helpers::{port_with_failing_repo, port_with_memory_repo};

#[tokio::test]
async fn test_add_returns_sum() {
    let (port, repo) = port_with_memory_repo();
    let service = CalculatorGrpcService::new(port);

    let response = service
        .add(Request::new(AddRequest { a: 2, b: 3 }))
        .await
        .unwrap();

    assert_eq!(response.into_inner().result, 5);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_add_wraps_on_overflow() {
    let (port, _repo) = port_with_memory_repo();
    let service = CalculatorGrpcService::new(port);

    let response = service
        .add(Request::new(AddRequest { a: i32::MAX, b: 1 }))
        .await
        .unwrap();

    assert_eq!(response.into_inner().result, i32::MIN);
}

#[tokio::test]
async fn test_divide_returns_quotient() {
    let (port, _repo) = port_with_memory_repo();
    let service = CalculatorGrpcService::new(port);

    let response = service
        .divide(Request::new(DivideRequest {
            dividend: 10,
            divisor: 3,
        }))
        .await
        .unwrap();

    assert_eq!(response.into_inner().result, 3);
}

#[tokio::test]
async fn test_divide_by_zero_maps_to_invalid_argument() {
    let (port, repo) = port_with_memory_repo();
    let service = CalculatorGrpcService::new(port);

    let status = service
        .divide(Request::new(DivideRequest {
            dividend: 10,
            divisor: 0,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "cannot divide by zero");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_add_persistence_failure_maps_to_internal() {
    let service = CalculatorGrpcService::new(port_with_failing_repo());

    let status = service
        .add(Request::new(AddRequest { a: 2, b: 3 }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "an unexpected error occurred");
}

#[tokio::test]
async fn test_divide_persistence_failure_is_internal_not_invalid_argument() {
    let service = CalculatorGrpcService::new(port_with_failing_repo());

    let status = service
        .divide(Request::new(DivideRequest {
            dividend: 10,
            divisor: 2,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert!(!status.message().contains("connection reset"));
}
