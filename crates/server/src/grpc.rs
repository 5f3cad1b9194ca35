//! Calculator gRPC Adapter
//!
//! Binds the calculator inbound port to the binary RPC surface. Each
//! call decodes the typed request, invokes the port and re-encodes the
//! result; errors are translated in `error.rs`.

use std::sync::Arc;

use calcd_ports::CalculatorPort;
use calcd_proto::{AddRequest, CalculationResponse, CalculatorService, DivideRequest};
use tonic::{Request, Response, Status};
use tracing::info;

use crate::error::status_from_calc_error;

/// gRPC service implementation backed by the inbound port
pub struct CalculatorGrpcService {
    usecase: Arc<dyn CalculatorPort>,
}

impl CalculatorGrpcService {
    pub fn new(usecase: Arc<dyn CalculatorPort>) -> Self {
        Self { usecase }
    }
}

#[tonic::async_trait]
impl CalculatorService for CalculatorGrpcService {
    async fn add(
        &self,
        request: Request<AddRequest>,
    ) -> Result<Response<CalculationResponse>, Status> {
        let req = request.into_inner();
        info!(a = req.a, b = req.b, "handling gRPC Add request");

        let calculation = self
            .usecase
            .add(req.a, req.b)
            .await
            .map_err(|e| status_from_calc_error(&e))?;

        info!(result = calculation.result, "gRPC Add request successful");
        Ok(Response::new(CalculationResponse {
            result: calculation.result,
        }))
    }

    async fn divide(
        &self,
        request: Request<DivideRequest>,
    ) -> Result<Response<CalculationResponse>, Status> {
        let req = request.into_inner();
        info!(
            dividend = req.dividend,
            divisor = req.divisor,
            "handling gRPC Divide request"
        );

        let calculation = self
            .usecase
            .divide(req.dividend, req.divisor)
            .await
            .map_err(|e| status_from_calc_error(&e))?;

        info!(
            result = calculation.result,
            "gRPC Divide request successful"
        );
        Ok(Response::new(CalculationResponse {
            result: calculation.result,
        }))
    }
}
