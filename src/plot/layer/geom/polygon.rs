//! Polygon and map geom implementations

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType};

options_struct! {
    /// Constant aesthetics shared by polygon and map
    pub struct PolygonAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct PolygonMapping {
        x => "x",
        y => "y",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

geom! {
    /// Polygon geom - filled paths
    pub struct Polygon => Polygon, PolygonMapping {
        aes: PolygonAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

geom! {
    /// Map geom - polygons from a boundary geometry
    pub struct Map => Map, PolygonMapping {
        aes: PolygonAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::geom::{GeomBuilder, GeomKind};

    #[test]
    fn test_map_is_polygon_with_own_kind() {
        let aes = PolygonAesthetics::default().fill("white").color("black");
        let polygon = Polygon::default().aes(aes.clone()).options();
        let map = Map::default().aes(aes).options();

        assert_eq!(map.kind(), GeomKind::Map);
        assert_eq!(map.parameters(), polygon.parameters());
        assert_eq!(GeomKind::Map.aesthetics(), GeomKind::Polygon.aesthetics());
    }
}
