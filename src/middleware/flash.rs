//! Avisos flash
//!
//! Un aviso se guarda en una cookie `flash` de vida corta y se consume en la
//! siguiente página que lo muestre. El valor lleva un tag MD5 calculado con
//! la secret key; una cookie alterada se ignora.

use axum::http::{header, HeaderMap, HeaderValue};

pub const COOKIE_NAME: &str = "flash";

/// Cookie que borra un aviso ya mostrado
pub const CLEAR_COOKIE: &str = "flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(FlashKind::Success),
            "error" => Some(FlashKind::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Error, message: message.into() }
    }

    /// Valor de `Set-Cookie` para este aviso
    pub fn to_cookie(&self, secret: &str) -> String {
        format!(
            "{}={}; Path=/; Max-Age=60; HttpOnly; SameSite=Lax",
            COOKIE_NAME,
            self.encode(secret)
        )
    }

    /// Leer el aviso de la cabecera `Cookie`, si existe y la firma es válida
    pub fn from_headers(headers: &HeaderMap, secret: &str) -> Option<Self> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .and_then(|(_, value)| Self::decode(value, secret))
    }

    pub fn clear_cookie() -> HeaderValue {
        HeaderValue::from_static(CLEAR_COOKIE)
    }

    fn encode(&self, secret: &str) -> String {
        let message = urlencoding::encode(&self.message);
        format!("{}|{}|{}", self.kind.as_str(), message, sign(secret, self.kind.as_str(), &message))
    }

    fn decode(value: &str, secret: &str) -> Option<Self> {
        let mut parts = value.splitn(3, '|');
        let kind = parts.next()?;
        let message = parts.next()?;
        let tag = parts.next()?;

        if sign(secret, kind, message) != tag {
            return None;
        }

        Some(Self {
            kind: FlashKind::parse(kind)?,
            message: urlencoding::decode(message).ok()?.into_owned(),
        })
    }
}

// Hash con la clave como prefijo, no un HMAC: admite extensión de longitud.
// Alcanza para texto de avisos; no usar para nada que autorice acciones.
fn sign(secret: &str, kind: &str, message: &str) -> String {
    format!("{:x}", md5::compute(format!("{}|{}|{}", secret, kind, message)))
}
