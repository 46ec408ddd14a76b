use catalog_domain::error::DomainError;
use catalog_domain::validation::ValidationError;

/// 应用层错误：领域错误原样透传，不做重试或吞没
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Domain(DomainError::from(err))
    }
}

impl AppError {
    /// 底层领域错误
    pub fn domain(&self) -> &DomainError {
        match self {
            AppError::Domain(err) => err,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.domain().is_not_found()
    }

    /// 若为字段校验失败，返回对应的校验错误
    pub fn validation(&self) -> Option<&ValidationError> {
        match self.domain() {
            DomainError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_passes_through_verbatim() {
        let err: AppError = ValidationError::new("Name", "Name should not be empty or null").into();
        assert_eq!(err.to_string(), "Name should not be empty or null");
        assert_eq!(err.validation().map(|v| v.field()), Some("Name"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_passes_through_verbatim() {
        let err: AppError = DomainError::not_found("Category", "42").into();
        assert_eq!(err.to_string(), "Category '42' not found.");
        assert!(err.is_not_found());
        assert!(err.validation().is_none());
    }
}
