//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `thyme_core::storage`.
//! A missing item is never an SDK error; `NotFound` is decided by the
//! repository when `GetItem` comes back empty.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::list_tables::ListTablesError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use thyme_core::storage::RepositoryError;

/// Transport-level failures (no response from DynamoDB at all).
fn transport_error<E: Debug, R: Debug>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            Some(map_connection_error(format!("{:?}", err)))
        }
        _ => None,
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        ScanError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Returns true when CreateTable failed because the table is already there.
pub fn is_table_already_exists<R>(err: &SdkError<CreateTableError, R>) -> bool {
    matches!(
        err.as_service_error(),
        Some(CreateTableError::ResourceInUseException(_))
    )
}

/// Map a CreateTable SDK error to RepositoryError.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
) -> RepositoryError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        CreateTableError::LimitExceededException(_) => {
            RepositoryError::QueryFailed("Table limit exceeded".to_string())
        }
        CreateTableError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("CreateTable failed: {:?}", err)),
    }
}

/// Map a ListTables SDK error to RepositoryError.
pub fn map_list_tables_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ListTablesError, R>,
) -> RepositoryError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        ListTablesError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("ListTables failed: {:?}", err)),
    }
}

/// Map a generic connection/config error to RepositoryError.
pub fn map_connection_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        LimitExceededException, ResourceInUseException, ResourceNotFoundException,
    };

    use super::*;

    fn missing_table() -> ResourceNotFoundException {
        ResourceNotFoundException::builder()
            .message("Requested resource not found")
            .build()
    }

    fn assert_store_failure(err: RepositoryError) {
        assert!(!err.is_not_found(), "expected a store failure, got {err:?}");
        assert_eq!(err, RepositoryError::QueryFailed("Table not found".to_string()));
    }

    #[test]
    fn test_existing_table_is_detected() {
        let err = SdkError::<CreateTableError, ()>::service_error(
            CreateTableError::ResourceInUseException(
                ResourceInUseException::builder()
                    .message("Table already exists: recipe")
                    .build(),
            ),
            (),
        );

        assert!(is_table_already_exists(&err));
    }

    #[test]
    fn test_other_create_table_failures_are_not_existing_table() {
        let err = SdkError::<CreateTableError, ()>::service_error(
            CreateTableError::LimitExceededException(LimitExceededException::builder().build()),
            (),
        );

        assert!(!is_table_already_exists(&err));
        assert_eq!(
            map_create_table_error(err),
            RepositoryError::QueryFailed("Table limit exceeded".to_string())
        );
    }

    #[test]
    fn test_missing_table_on_get_is_store_failure() {
        let err = SdkError::<GetItemError, ()>::service_error(
            GetItemError::ResourceNotFoundException(missing_table()),
            (),
        );

        assert_store_failure(map_get_item_error(err));
    }

    #[test]
    fn test_missing_table_on_put_is_store_failure() {
        let err = SdkError::<PutItemError, ()>::service_error(
            PutItemError::ResourceNotFoundException(missing_table()),
            (),
        );

        assert_store_failure(map_put_item_error(err));
    }

    #[test]
    fn test_missing_table_on_scan_is_store_failure() {
        let err = SdkError::<ScanError, ()>::service_error(
            ScanError::ResourceNotFoundException(missing_table()),
            (),
        );

        assert_store_failure(map_scan_error(err));
    }

    #[test]
    fn test_missing_table_on_delete_is_store_failure() {
        let err = SdkError::<DeleteItemError, ()>::service_error(
            DeleteItemError::ResourceNotFoundException(missing_table()),
            (),
        );

        assert_store_failure(map_delete_item_error(err));
    }

    #[test]
    fn test_timeout_is_connection_failure() {
        let err = SdkError::<GetItemError, ()>::timeout_error(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "no response",
        ));

        assert!(matches!(
            map_get_item_error(err),
            RepositoryError::ConnectionFailed(_)
        ));
    }
}
