use crate::models::change_point::ChangePoint;
use crate::models::series::PriceSeries;

// ============================================================================
// ChartProjection: chart-ready datasets derived from series + change points
// ============================================================================

/// What a dataset IS. Interaction code branches on this tag instead of
/// sniffing display labels, so renaming a legend entry can never break
/// click handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// The full price history, drawn as a line.
    PriceSeries,
    /// A single change-point marker. `cp_index` addresses the change point
    /// list the projection was built from.
    ChangePointMarker { cp_index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub kind: DatasetKind,
    /// Points in plot space: x is the row index into the series, y the price.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartProjection {
    pub datasets: Vec<ChartDataset>,
}

impl ChartProjection {
    /// Derive chart datasets from the loaded data.
    ///
    /// The price dataset is always first. Every in-bounds change point
    /// contributes one single-point marker dataset; out-of-bounds indices
    /// are skipped here (the data layer logs them when reconciling).
    pub fn build(series: &PriceSeries, change_points: &[ChangePoint]) -> Self {
        let price_points = series
            .prices
            .iter()
            .enumerate()
            .map(|(i, &price)| [i as f64, price])
            .collect();

        let mut datasets = vec![ChartDataset {
            kind: DatasetKind::PriceSeries,
            points: price_points,
        }];

        for (cp_index, cp) in change_points.iter().enumerate() {
            let Some(price) = cp.price_in(series) else {
                continue;
            };
            datasets.push(ChartDataset {
                kind: DatasetKind::ChangePointMarker { cp_index },
                points: vec![[cp.index as f64, price]],
            });
        }

        Self { datasets }
    }

    pub fn price_dataset(&self) -> Option<&ChartDataset> {
        self.datasets
            .iter()
            .find(|d| d.kind == DatasetKind::PriceSeries)
    }

    pub fn marker_datasets(&self) -> impl Iterator<Item = &ChartDataset> {
        self.datasets
            .iter()
            .filter(|d| matches!(d.kind, DatasetKind::ChangePointMarker { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> PriceSeries {
        PriceSeries::from_parts(
            vec![
                "2020-01-31".into(),
                "2020-02-29".into(),
                "2020-03-31".into(),
                "2020-04-30".into(),
            ],
            vec![58.16, 50.52, 22.74, 25.27],
        )
        .unwrap()
    }

    #[test]
    fn price_dataset_covers_every_row_in_order() {
        let projection = ChartProjection::build(&series(), &[]);
        let price = projection.price_dataset().unwrap();
        assert_eq!(
            price.points,
            vec![[0.0, 58.16], [1.0, 50.52], [2.0, 22.74], [3.0, 25.27]]
        );
    }

    #[test]
    fn each_change_point_becomes_a_tagged_single_point_dataset() {
        let change_points = vec![
            ChangePoint {
                index: 2,
                impact: -27.8,
            },
            ChangePoint {
                index: 3,
                impact: 2.5,
            },
        ];
        let projection = ChartProjection::build(&series(), &change_points);
        let markers: Vec<_> = projection.marker_datasets().collect();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].kind, DatasetKind::ChangePointMarker { cp_index: 0 });
        assert_eq!(markers[0].points, vec![[2.0, 22.74]]);
        assert_eq!(markers[1].kind, DatasetKind::ChangePointMarker { cp_index: 1 });
        assert_eq!(markers[1].points, vec![[3.0, 25.27]]);
    }

    #[test]
    fn out_of_bounds_change_points_project_no_marker() {
        let change_points = vec![
            ChangePoint {
                index: 99,
                impact: 1.0,
            },
            ChangePoint {
                index: 1,
                impact: -7.6,
            },
        ];
        let projection = ChartProjection::build(&series(), &change_points);
        let markers: Vec<_> = projection.marker_datasets().collect();
        assert_eq!(markers.len(), 1, "only the in-bounds point should survive");
        // The surviving marker still carries its position in the original list.
        assert_eq!(markers[0].kind, DatasetKind::ChangePointMarker { cp_index: 1 });
    }

    #[test]
    fn empty_series_projects_an_empty_price_dataset() {
        let projection = ChartProjection::build(&PriceSeries::default(), &[]);
        assert_eq!(projection.datasets.len(), 1);
        assert!(projection.price_dataset().unwrap().points.is_empty());
    }
}
