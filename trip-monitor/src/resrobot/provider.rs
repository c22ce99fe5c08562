//! Monitor collaborator implementations backed by ResRobot.

use crate::domain::{PageToken, StopCandidate, StopId, TripPage};
use crate::monitor::{MonitorError, StopResolver, TripFetcher};

use super::client::ResRobotClient;
use super::convert::{convert_locations, convert_trip_page};
use super::error::ResRobotError;

impl StopResolver for ResRobotClient {
    async fn lookup(&self, name: &str) -> Result<Vec<StopCandidate>, MonitorError> {
        let response = self
            .location_name(name)
            .await
            .map_err(|e| MonitorError::Lookup {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(convert_locations(&response))
    }
}

impl TripFetcher for ResRobotClient {
    async fn trips(
        &self,
        origin: &StopId,
        destination: &StopId,
        token: Option<&PageToken>,
    ) -> Result<TripPage, MonitorError> {
        let fetch_error = |e: ResRobotError| MonitorError::Fetch {
            origin: origin.clone(),
            destination: destination.clone(),
            message: e.to_string(),
        };

        let response = self
            .trip(
                origin.as_str(),
                destination.as_str(),
                token.map(PageToken::as_str),
            )
            .await
            .map_err(fetch_error)?;

        let trips = response
            .trips
            .as_deref()
            .ok_or(ResRobotError::NoTrips)
            .map_err(fetch_error)?;

        Ok(convert_trip_page(trips, response.scroll_forward.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resrobot::ResRobotConfig;
    use crate::resrobot::test_server::TestServer;

    fn client(server: &TestServer) -> ResRobotClient {
        ResRobotClient::new(ResRobotConfig::new("test-key").with_base_url(&server.base_url))
            .unwrap()
    }

    fn stop_id(s: &str) -> StopId {
        StopId::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn lookup_returns_stop_candidates() {
        let body = r#"{"stopLocationOrCoordLocation": [
            {"StopLocation": {"extId": "740000120", "name": "Lund Centralstation"}},
            {"StopLocation": {"extId": "740025756", "name": "Lund Clemenstorget"}}
        ]}"#;
        let server = TestServer::start(200, body).await;

        let candidates = client(&server).lookup("Lund Central").await.unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, stop_id("740000120"));
    }

    #[tokio::test]
    async fn lookup_failure_names_the_stop() {
        let server = TestServer::start(500, "boom").await;

        let err = client(&server).lookup("Lund Central").await.unwrap_err();

        assert!(matches!(err, MonitorError::Lookup { ref name, .. } if name == "Lund Central"));
    }

    #[tokio::test]
    async fn trips_convert_page() {
        let body = r#"{
            "Trip": [{"LegList": {"Leg": [{
                "Origin": {"name": "Dalby busstation (Lund kn)", "time": "10:20:00", "date": "2024-03-15"},
                "Destination": {"name": "Lund Centralstation", "time": "10:45:00", "date": "2024-03-15"},
                "Product": [{"name": "Länstrafik - Buss 171", "num": "171"}],
                "type": "JNY"
            }]}}],
            "scrF": "3|OF|MT"
        }"#;
        let server = TestServer::start(200, body).await;

        let page = client(&server)
            .trips(&stop_id("740020671"), &stop_id("740000120"), None)
            .await
            .unwrap();

        assert_eq!(page.trips.len(), 1);
        assert_eq!(page.trips[0].line, "171");
        assert_eq!(page.next, Some(PageToken::new("3|OF|MT")));
    }

    #[tokio::test]
    async fn missing_trip_list_is_a_fetch_failure() {
        let server = TestServer::start(200, r#"{"scrF": "3|OF|MT"}"#).await;

        let err = client(&server)
            .trips(&stop_id("740020671"), &stop_id("740000120"), None)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to fetch trips from 740020671 to 740000120: no trips in response"
        );
    }
}
