/// Structural problems with an API payload or one of its records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewError {
    #[error("Ожидался словарь, получено значение типа {0}")]
    NotAnObject(&'static str),
    #[error("В ответе отсутствует ключ {0}")]
    MissingKey(&'static str),
    #[error("Значение по ключу {0} не является списком")]
    NotAList(&'static str),
    #[error("Получен неизвестный статус работы: {0}")]
    UnknownStatus(String),
}
