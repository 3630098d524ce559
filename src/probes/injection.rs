use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::payloads::PayloadSet;
use super::signature::SqlErrorSignatures;
use super::{Probe, ProbeTarget};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::models::{Finding, FindingCategory, HttpMethod, ScanAccumulator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// Database error text in the body, or a 5xx where the plain request was not.
    SqlError,
    /// Payload echoed back unescaped.
    Reflection,
}

/// Substitutes each payload into one query parameter at a time and looks
/// for a response signal.
pub struct InjectionProbe {
    name: &'static str,
    category: FindingCategory,
    payloads: &'static [&'static str],
    detection: Detection,
    signatures: SqlErrorSignatures,
}

impl InjectionProbe {
    pub fn new(
        name: &'static str,
        category: FindingCategory,
        payloads: &'static [&'static str],
        detection: Detection,
    ) -> Self {
        Self {
            name,
            category,
            payloads,
            detection,
            signatures: SqlErrorSignatures::new(),
        }
    }

    pub fn sql() -> Self {
        Self::new(
            "sql-injection",
            FindingCategory::Injection,
            PayloadSet::SQL_INJECTION,
            Detection::SqlError,
        )
    }

    /// Only GET endpoints are replayed with payloads. Other verbs may change
    /// server state, and their bodies are not part of the replay.
    pub fn replays(method: &HttpMethod) -> bool {
        *method == HttpMethod::Get
    }

    pub fn xss() -> Self {
        Self::new(
            "xss",
            FindingCategory::CrossSiteScripting,
            PayloadSet::CROSS_SITE_SCRIPTING,
            Detection::Reflection,
        )
    }

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn inject(url: &Url, pairs: &[(String, String)], index: usize, payload: &str) -> String {
        let mut injected = url.clone();
        {
            let mut query = injected.query_pairs_mut();
            query.clear();
            for (i, (key, value)) in pairs.iter().enumerate() {
                let value = if i == index { payload } else { value.as_str() };
                query.append_pair(key, value);
            }
        }
        injected.to_string()
    }

    fn assess(
        &self,
        baseline_status: Option<u16>,
        response: &HttpResponse,
        param: &str,
        payload: &str,
    ) -> Option<String> {
        match self.detection {
            Detection::SqlError => {
                if self.signatures.matches(&response.body) {
                    return Some(format!(
                        "Database error signature in response when '{}' = {}",
                        param, payload
                    ));
                }
                let baseline_ok = baseline_status.is_some_and(|s| s < 500);
                if baseline_ok && response.status >= 500 {
                    return Some(format!(
                        "Status {} (baseline {}) when '{}' = {}",
                        response.status,
                        baseline_status.unwrap_or_default(),
                        param,
                        payload
                    ));
                }
                None
            }
            Detection::Reflection => response.body.contains(payload).then(|| {
                format!("Payload reflected unescaped via '{}': {}", param, payload)
            }),
        }
    }
}

#[async_trait]
impl Probe for InjectionProbe {
    fn name(&self) -> &str {
        self.name
    }

    async fn run(
        &self,
        target: &ProbeTarget<'_>,
        transport: &dyn Transport,
        acc: &mut ScanAccumulator,
    ) {
        if !Self::replays(target.method) {
            debug!(probe = self.name, method = %target.method, "not replaying non-GET endpoint");
            return;
        }

        let url = match Url::parse(target.url) {
            Ok(url) => url,
            Err(e) => {
                debug!(url = target.url, error = %e, "skipping probe on unparseable URL");
                return;
            }
        };

        let pairs = Self::query_pairs(&url);
        if pairs.is_empty() {
            return;
        }

        for (index, (param, _)) in pairs.iter().enumerate() {
            for payload in self.payloads {
                let injected = Self::inject(&url, &pairs, index, payload);
                let request =
                    HttpRequest::for_session(target.method.clone(), injected, target.session);

                let response = match transport.send(request).await {
                    Ok(response) => response,
                    Err(e) => {
                        debug!(probe = self.name, error = %e, "probe request failed");
                        continue;
                    }
                };

                if let Some(detail) = self.assess(target.baseline_status, &response, param, payload) {
                    acc.add_finding(Finding::new(target.endpoint_name, self.category, detail));
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_replaces_single_param() {
        let url = Url::parse("http://h/api/students?name=bob&page=2").unwrap();
        let pairs = InjectionProbe::query_pairs(&url);
        let injected = InjectionProbe::inject(&url, &pairs, 0, "' OR '1'='1");

        let reparsed = Url::parse(&injected).unwrap();
        let values = InjectionProbe::query_pairs(&reparsed);
        assert_eq!(values[0], ("name".to_string(), "' OR '1'='1".to_string()));
        assert_eq!(values[1], ("page".to_string(), "2".to_string()));
    }

    #[test]
    fn test_only_get_is_replayed() {
        assert!(InjectionProbe::replays(&HttpMethod::Get));
        assert!(!InjectionProbe::replays(&HttpMethod::Post));
        assert!(!InjectionProbe::replays(&HttpMethod::Put));
        assert!(!InjectionProbe::replays(&HttpMethod::Delete));
    }

    #[test]
    fn test_sql_assess_status_anomaly() {
        let probe = InjectionProbe::sql();
        let response = HttpResponse::new(500, "Internal Server Error");
        assert!(probe.assess(Some(200), &response, "q", "x").is_some());
        assert!(probe.assess(Some(500), &response, "q", "x").is_none());
    }

    #[test]
    fn test_sql_assess_error_signature() {
        let probe = InjectionProbe::sql();
        let response = HttpResponse::new(400, "PSQLException: syntax error at or near \"OR\"");
        assert!(probe.assess(Some(200), &response, "q", "x").is_some());
    }

    #[test]
    fn test_xss_assess_reflection() {
        let probe = InjectionProbe::xss();
        let payload = PayloadSet::CROSS_SITE_SCRIPTING[0];
        let reflected = HttpResponse::new(200, format!("<p>{}</p>", payload));
        let escaped = HttpResponse::new(200, "&lt;script&gt;alert(1)&lt;/script&gt;");

        assert!(probe.assess(Some(200), &reflected, "q", payload).is_some());
        assert!(probe.assess(Some(200), &escaped, "q", payload).is_none());
    }
}
