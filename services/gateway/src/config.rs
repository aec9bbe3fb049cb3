use anyhow::Context;
use std::net::SocketAddr;
use types::ids::IdentityId;
use uuid::Uuid;

/// Gateway configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listen address (`GATEWAY_BIND_ADDR`, default 0.0.0.0:8080)
    pub bind_addr: SocketAddr,
    /// HMAC secret for session tokens (`GATEWAY_JWT_SECRET`)
    pub jwt_secret: String,
    /// Comma-separated identity UUIDs seeding the profile directory
    /// (`GATEWAY_SEED_IDENTITIES`), standing in for the external profile
    /// service until one is wired up
    pub seed_identities: Vec<IdentityId>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let bind_addr = match std::env::var("GATEWAY_BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid GATEWAY_BIND_ADDR: {}", raw))?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        let jwt_secret = std::env::var("GATEWAY_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("GATEWAY_JWT_SECRET not set, using development default");
            "dev-secret".to_string()
        });

        let seed_identities = match std::env::var("GATEWAY_SEED_IDENTITIES") {
            Ok(raw) => Self::parse_seed_identities(&raw)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            seed_identities,
        })
    }

    fn parse_seed_identities(raw: &str) -> Result<Vec<IdentityId>, anyhow::Error> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                let uuid: Uuid = s
                    .parse()
                    .with_context(|| format!("invalid identity id in GATEWAY_SEED_IDENTITIES: {}", s))?;
                Ok(IdentityId::from_uuid(uuid))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_identities() {
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();
        let raw = format!("{}, {}", a, b);

        let parsed = GatewayConfig::parse_seed_identities(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], IdentityId::from_uuid(a));
        assert_eq!(parsed[1], IdentityId::from_uuid(b));
    }

    #[test]
    fn test_parse_seed_identities_rejects_garbage() {
        assert!(GatewayConfig::parse_seed_identities("not-a-uuid").is_err());
    }

    #[test]
    fn test_parse_seed_identities_empty() {
        assert!(GatewayConfig::parse_seed_identities("").unwrap().is_empty());
    }
}
