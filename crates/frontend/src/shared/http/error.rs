use contracts::shared::list_envelope::EnvelopeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Ошибка сети: {0}")]
    Network(String),

    /// 401: сессия уже завершена клиентом
    #[error("Сессия истекла, войдите заново")]
    Unauthorized,

    #[error("Ошибка сервера {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error("Ошибка сериализации запроса: {0}")]
    Serialize(String),
}

impl ApiError {
    /// HTTP status the error carries, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_carried() {
        let err = ApiError::Status {
            status: 400,
            detail: "{\"number\":[\"required\"]}".into(),
        };
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("400"));
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Network("down".into()).status(), None);
    }
}
