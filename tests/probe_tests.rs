// tests/probe_tests.rs
use mockito::{Matcher, Server};
use nagios_probes::config::{HttpConfig, RetryConfig};
use nagios_probes::health::REQUEST_FAILED_DESCRIPTION_ID;
use nagios_probes::probe::{self, Credentials};
use nagios_probes::retry::RetryStrategy;
use nagios_probes::unity::{ComponentType, StorageHealthProbe, UnityClient};
use nagiosplugin::ServiceState;
use url::Url;

fn unity_probe(server: &Server, component: ComponentType) -> StorageHealthProbe<UnityClient> {
    let client = UnityClient::new(
        Url::parse(&server.url()).unwrap(),
        Credentials::new("monitor", "secret"),
        &HttpConfig::default(),
    )
    .unwrap();

    StorageHealthProbe::new(client, component, RetryStrategy::new(RetryConfig::default()))
}

async fn mock_login(server: &mut Server) -> mockito::Mock {
    server
        .mock("GET", "/api/types/loginSessionInfo")
        .with_status(200)
        .with_header("EMC-CSRF-TOKEN", "csrf")
        .create_async()
        .await
}

#[tokio::test]
async fn test_unity_degraded_power_supply() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    server
        .mock("GET", "/api/types/powerSupply/instances")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"entries": [
                {"content": {"id": "dpe_psu_a", "health": {"value": 5, "descriptionIds": ["ALRT_COMPONENT_OK"], "descriptions": ["The component is operating normally."]}}},
                {"content": {"id": "dpe_psu_b", "health": {"value": 10, "descriptionIds": ["ALRT_POWER_SUPPLY_DEGRADED"], "descriptions": ["The power supply is degraded."]}}}
            ]}"#,
        )
        .create_async()
        .await;

    let (state, text) = probe::execute(&unity_probe(&server, ComponentType::PowerSupply))
        .await
        .nagios_result();

    assert_eq!(state.exit_code(), 1);
    assert_eq!(
        text,
        "powerSupply is WARNING: ALRT_POWER_SUPPLY_DEGRADED,The power supply is degraded.,10|"
    );
}

#[tokio::test]
async fn test_unity_empty_uncommitted_ports() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    server
        .mock("GET", "/api/types/uncommittedPort/instances")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"entries": []}"#)
        .create_async()
        .await;

    let (state, text) = probe::execute(&unity_probe(&server, ComponentType::UncommittedPort))
        .await
        .nagios_result();

    assert_eq!(state, ServiceState::Ok);
    assert!(text.starts_with("uncommittedPort is OK: GOT_EMPTY_FROM_UNITY,"));
}

#[tokio::test]
async fn test_unity_system_health() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server).await;

    let healthy = server
        .mock("GET", "/api/types/system/instances")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"entries": [{"content": {"id": "0", "health": {"value": 5, "descriptionIds": ["ALRT_SYSTEM_OK"], "descriptions": ["The system is operating normally."]}}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let (state, text) = probe::execute(&unity_probe(&server, ComponentType::System))
        .await
        .nagios_result();

    assert_eq!(state, ServiceState::Ok);
    assert!(text.starts_with("system is OK: ALRT_SYSTEM_OK,"));
    login.assert_async().await;
    healthy.assert_async().await;
}

#[tokio::test]
async fn test_unity_rejected_login_is_unknown() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/types/loginSessionInfo")
        .with_status(401)
        .create_async()
        .await;

    let (state, text) = probe::execute(&unity_probe(&server, ComponentType::System))
        .await
        .nagios_result();

    assert_eq!(state, ServiceState::Unknown);
    assert_eq!(state.exit_code(), 3);
    assert!(text.starts_with(&format!("system is UNKNOWN: {},", REQUEST_FAILED_DESCRIPTION_ID)));
    assert!(text.ends_with(",0|"));
}
