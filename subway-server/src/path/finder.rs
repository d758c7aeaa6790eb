//! Path lookup over a set of lines.

use tracing::debug;

use crate::domain::{Distance, Line, LineId, Station};
use crate::fare::FarePolicy;

use super::dijkstra::Dijkstra;
use super::graph::RouteGraph;
use super::strategy::{PathError, ShortestPathFinder};

/// The shortest route between two stations and what it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    stations: Vec<Station>,
    distance: Distance,
    fare: u64,
    lines: Vec<LineId>,
}

impl Path {
    /// Stations from source to target, inclusive.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Distance fare plus the highest surcharge of the lines ridden.
    pub fn fare(&self) -> u64 {
        self.fare
    }

    /// Lines ridden, in the order they are first boarded.
    pub fn lines(&self) -> &[LineId] {
        &self.lines
    }
}

/// Finds and prices routes.
///
/// Builds a fresh [`RouteGraph`] for every query and hands it to the
/// search strategy `F`. Nothing is cached between calls, so a `PathFinder`
/// can be shared freely.
#[derive(Debug, Clone)]
pub struct PathFinder<F = Dijkstra> {
    strategy: F,
    policy: FarePolicy,
}

impl<F: ShortestPathFinder> PathFinder<F> {
    /// Create a path finder using `strategy` and the default tariff.
    pub fn new(strategy: F) -> Self {
        Self {
            strategy,
            policy: FarePolicy::default(),
        }
    }

    /// Replace the tariff.
    pub fn with_policy(mut self, policy: FarePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &FarePolicy {
        &self.policy
    }

    /// Find the shortest route from `source` to `target` over `lines`.
    ///
    /// # Errors
    ///
    /// Whatever the strategy reports: [`PathError::SameStation`],
    /// [`PathError::UnknownStation`] or [`PathError::Disconnected`].
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::{Distance, Line, LineId, Station, StationId};
    /// use subway_server::path::PathFinder;
    ///
    /// let a = Station::new(StationId::new(1), "교대역");
    /// let b = Station::new(StationId::new(2), "강남역");
    /// let line = Line::new(
    ///     LineId::new(2), "2호선", "bg-green-600", 0,
    ///     a.clone(), b.clone(), Distance::new(10).unwrap(),
    /// ).unwrap();
    ///
    /// let path = PathFinder::default().find_shortest_path(&[line], &a, &b).unwrap();
    /// assert_eq!(path.stations(), &[a, b]);
    /// assert_eq!(path.distance().value(), 10);
    /// assert_eq!(path.fare(), 1250);
    /// ```
    pub fn find_shortest_path(
        &self,
        lines: &[Line],
        source: &Station,
        target: &Station,
    ) -> Result<Path, PathError> {
        let graph = RouteGraph::build(lines);
        let route = self.strategy.find(&graph, source, target)?;

        let stations: Vec<Station> = route
            .vertices
            .iter()
            .map(|&v| graph.station(v).clone())
            .collect();

        let mut used: Vec<LineId> = Vec::new();
        let mut surcharges = Vec::new();
        for &e in &route.edges {
            let edge = graph.edge(e);
            if !used.contains(&edge.line) {
                used.push(edge.line);
                surcharges.push(edge.surcharge);
            }
        }

        let fare = self.policy.fare(route.distance, surcharges);

        debug!(
            from = %source,
            to = %target,
            stops = stations.len(),
            distance = route.distance.value(),
            fare,
            lines = used.len(),
            "path found"
        );

        Ok(Path {
            stations,
            distance: route.distance,
            fare,
            lines: used,
        })
    }
}

impl Default for PathFinder<Dijkstra> {
    fn default() -> Self {
        Self::new(Dijkstra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use crate::path::Exhaustive;

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId::new(id), name)
    }

    fn km(n: i64) -> Distance {
        Distance::new(n).unwrap()
    }

    fn names(path: &Path) -> Vec<&str> {
        path.stations().iter().map(Station::name).collect()
    }

    /// ```text
    /// 교대역    --- 2호선 (10) ---   강남역
    ///   |                             |
    /// 3호선 (5)                  신분당선 (10)
    ///   |                             |
    /// 남부터미널역 --- 3호선 (3) ---  양재역
    ///                                 |
    ///                            신분당선 (50)
    ///                                 |
    ///                               정자역
    /// ```
    struct Seoul {
        gyodae: Station,
        gangnam: Station,
        yangjae: Station,
        jeongja: Station,
        nambu: Station,
        lines: Vec<Line>,
    }

    fn seoul() -> Seoul {
        let gyodae = station(1, "교대역");
        let gangnam = station(2, "강남역");
        let yangjae = station(3, "양재역");
        let jeongja = station(4, "정자역");
        let nambu = station(5, "남부터미널역");

        let mut sinbundang = Line::new(
            LineId::new(1),
            "신분당선",
            "bg-red-600",
            0,
            gangnam.clone(),
            yangjae.clone(),
            km(10),
        )
        .unwrap();
        sinbundang
            .add_section(yangjae.clone(), jeongja.clone(), km(50))
            .unwrap();

        let line2 = Line::new(
            LineId::new(2),
            "2호선",
            "bg-green-600",
            0,
            gyodae.clone(),
            gangnam.clone(),
            km(10),
        )
        .unwrap();

        let mut line3 = Line::new(
            LineId::new(3),
            "3호선",
            "bg-orange-600",
            0,
            gyodae.clone(),
            nambu.clone(),
            km(5),
        )
        .unwrap();
        line3.add_section(nambu.clone(), yangjae.clone(), km(3)).unwrap();

        Seoul {
            gyodae,
            gangnam,
            yangjae,
            jeongja,
            nambu,
            lines: vec![line2, line3, sinbundang],
        }
    }

    #[test]
    fn shortest_path_across_lines() {
        let net = seoul();
        let path = PathFinder::default()
            .find_shortest_path(&net.lines, &net.gyodae, &net.yangjae)
            .unwrap();

        assert_eq!(names(&path), vec!["교대역", "남부터미널역", "양재역"]);
        assert_eq!(path.distance().value(), 8);
        assert_eq!(path.lines(), &[LineId::new(3)]);
    }

    #[test]
    fn same_station_fails() {
        let net = seoul();
        let err = PathFinder::default()
            .find_shortest_path(&net.lines, &net.gyodae, &net.gyodae)
            .unwrap_err();
        assert_eq!(err, PathError::SameStation(net.gyodae.clone()));

        // Even with no lines at all
        let err = PathFinder::default()
            .find_shortest_path(&[], &net.gyodae, &net.gyodae)
            .unwrap_err();
        assert!(matches!(err, PathError::SameStation(_)));
    }

    #[test]
    fn disconnected_fails() {
        let mut net = seoul();
        let seoul_station = station(10, "서울역");
        let samgakji = station(11, "삼각지역");
        net.lines.push(
            Line::new(
                LineId::new(4),
                "4호선",
                "bg-blue-600",
                0,
                seoul_station,
                samgakji.clone(),
                km(5),
            )
            .unwrap(),
        );

        let err = PathFinder::default()
            .find_shortest_path(&net.lines, &net.gyodae, &samgakji)
            .unwrap_err();
        assert_eq!(
            err,
            PathError::Disconnected {
                from: net.gyodae.clone(),
                to: samgakji,
            }
        );
    }

    #[test]
    fn unknown_station_fails() {
        let net = seoul();
        let nowhere = station(99, "존재하지않는역");
        let err = PathFinder::default()
            .find_shortest_path(&net.lines, &net.gyodae, &nowhere)
            .unwrap_err();
        assert_eq!(err, PathError::UnknownStation(nowhere));
    }

    #[test]
    fn fare_by_distance() {
        let net = seoul();
        let finder = PathFinder::default();

        let base = finder
            .find_shortest_path(&net.lines, &net.gangnam, &net.yangjae)
            .unwrap();
        let over_ten = finder
            .find_shortest_path(&net.lines, &net.gangnam, &net.nambu)
            .unwrap();
        let over_fifty = finder
            .find_shortest_path(&net.lines, &net.gangnam, &net.jeongja)
            .unwrap();

        assert_eq!(base.fare(), 1250);
        assert_eq!(over_ten.distance().value(), 13);
        assert_eq!(over_ten.fare(), 1350);
        assert_eq!(over_fifty.distance().value(), 60);
        assert_eq!(over_fifty.fare(), 2250);
    }

    /// ```text
    /// 동대문역 --- 1호선 (300) --- 동묘앞역 --- 6호선 (900) --- 창신역
    /// ```
    #[test]
    fn fare_takes_most_expensive_surcharge() {
        let dongdaemun = station(1, "동대문역");
        let dongmyo = station(2, "동묘앞역");
        let changsin = station(3, "창신역");

        let line1 = Line::new(
            LineId::new(1),
            "1호선",
            "bg-blue-600",
            300,
            dongdaemun.clone(),
            dongmyo.clone(),
            km(2),
        )
        .unwrap();
        let line6 = Line::new(
            LineId::new(6),
            "6호선",
            "bg-brown-600",
            900,
            dongmyo,
            changsin.clone(),
            km(2),
        )
        .unwrap();

        let path = PathFinder::default()
            .find_shortest_path(&[line1, line6], &dongdaemun, &changsin)
            .unwrap();

        assert_eq!(path.distance().value(), 4);
        assert_eq!(path.fare(), 2150);
        assert_eq!(path.lines(), &[LineId::new(1), LineId::new(6)]);
    }

    /// ```text
    /// 대림 -(5)- 구로디지털단지 -(5)- 신대방      (2호선, split from 대림-신대방 10)
    ///  |                                |
    /// (10) 7호선                    (7) 독산선
    ///  |                                |
    /// 남구로 ------- (4) 7호선 ------- 가산디지털단지
    /// ```
    #[test]
    fn route_over_split_section() {
        let daerim = station(1, "대림");
        let guro = station(2, "구로디지털단지");
        let sindaebang = station(3, "신대방");
        let namguro = station(4, "남구로");
        let gasan = station(5, "가산디지털단지");

        let mut line2 = Line::new(
            LineId::new(2),
            "2호선",
            "green",
            0,
            daerim.clone(),
            sindaebang.clone(),
            km(10),
        )
        .unwrap();
        line2.add_section(daerim.clone(), guro.clone(), km(5)).unwrap();

        let mut line7 = Line::new(
            LineId::new(7),
            "7호선",
            "olive",
            0,
            daerim,
            namguro.clone(),
            km(10),
        )
        .unwrap();
        line7.add_section(namguro, gasan.clone(), km(4)).unwrap();

        let doksan = Line::new(
            LineId::new(8),
            "독산선",
            "grey",
            0,
            sindaebang,
            gasan.clone(),
            km(7),
        )
        .unwrap();

        let path = PathFinder::default()
            .find_shortest_path(&[line2, line7, doksan], &guro, &gasan)
            .unwrap();

        assert_eq!(names(&path), vec!["구로디지털단지", "신대방", "가산디지털단지"]);
        assert_eq!(path.distance().value(), 12);
    }

    #[test]
    fn strategies_are_interchangeable() {
        let net = seoul();
        let dijkstra = PathFinder::new(Dijkstra)
            .find_shortest_path(&net.lines, &net.gyodae, &net.jeongja)
            .unwrap();
        let exhaustive = PathFinder::new(Exhaustive)
            .find_shortest_path(&net.lines, &net.gyodae, &net.jeongja)
            .unwrap();
        assert_eq!(dijkstra, exhaustive);
    }

    #[test]
    fn custom_policy_is_used() {
        let net = seoul();
        let policy = FarePolicy::new(1000, 10, 50, 5, 8, 100);
        let path = PathFinder::default()
            .with_policy(policy.clone())
            .find_shortest_path(&net.lines, &net.gyodae, &net.yangjae)
            .unwrap();
        assert_eq!(path.fare(), 1000);
        assert_eq!(PathFinder::new(Dijkstra).with_policy(policy).policy().base_fare, 1000);
    }
}
