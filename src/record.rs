use serde::Serialize;

/// Placeholder for fields the source dataset cannot provide.
/// Distinct from a computed zero.
pub const UNAVAILABLE: f64 = -1.0;

/// One row of the unified trajectory format.
///
/// Field order is the output column order; downstream consumers key on
/// both position and name, so it must not change. Pixel-unit fields
/// mirror the metric fields projected onto the dataset's background
/// image, or hold [`UNAVAILABLE`] when the dataset has no image scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    #[serde(rename = "frameNum")]
    pub frame_num: i64,
    #[serde(rename = "carId")]
    pub car_id: i64,
    #[serde(rename = "carCenterX")]
    pub car_center_x: f64,
    #[serde(rename = "carCenterY")]
    pub car_center_y: f64,
    #[serde(rename = "boundingBox1X")]
    pub bounding_box_1x: f64,
    #[serde(rename = "boundingBox1Y")]
    pub bounding_box_1y: f64,
    #[serde(rename = "boundingBox2X")]
    pub bounding_box_2x: f64,
    #[serde(rename = "boundingBox2Y")]
    pub bounding_box_2y: f64,
    #[serde(rename = "boundingBox3X")]
    pub bounding_box_3x: f64,
    #[serde(rename = "boundingBox3Y")]
    pub bounding_box_3y: f64,
    #[serde(rename = "boundingBox4X")]
    pub bounding_box_4x: f64,
    #[serde(rename = "boundingBox4Y")]
    pub bounding_box_4y: f64,
    #[serde(rename = "carCenterXm")]
    pub car_center_xm: f64,
    #[serde(rename = "carCenterYm")]
    pub car_center_ym: f64,
    #[serde(rename = "boundingBox1Xm")]
    pub bounding_box_1xm: f64,
    #[serde(rename = "boundingBox1Ym")]
    pub bounding_box_1ym: f64,
    #[serde(rename = "boundingBox2Xm")]
    pub bounding_box_2xm: f64,
    #[serde(rename = "boundingBox2Ym")]
    pub bounding_box_2ym: f64,
    #[serde(rename = "boundingBox3Xm")]
    pub bounding_box_3xm: f64,
    #[serde(rename = "boundingBox3Ym")]
    pub bounding_box_3ym: f64,
    #[serde(rename = "boundingBox4Xm")]
    pub bounding_box_4xm: f64,
    #[serde(rename = "boundingBox4Ym")]
    pub bounding_box_4ym: f64,
    pub heading: f64,
    pub course: f64,
    pub speed: f64,
    #[serde(rename = "objClass")]
    pub obj_class: i64,
    #[serde(rename = "carCenterLon")]
    pub car_center_lon: f64,
    #[serde(rename = "carCenterLat")]
    pub car_center_lat: f64,
    #[serde(rename = "laneId")]
    pub lane_id: Option<i64>,
}

impl NormalizedRecord {
    /// Build a record from metric-space geometry.
    ///
    /// `meters_per_pixel` populates the pixel-unit twins; `None` emits
    /// [`UNAVAILABLE`] for every pixel field. Course and geographic
    /// coordinates have no source in the currently supported datasets
    /// and are always emitted as [`UNAVAILABLE`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_metric(
        frame_num: i64,
        car_id: i64,
        center: [f64; 2],
        corners: [[f64; 2]; 4],
        heading: f64,
        speed: f64,
        obj_class: i64,
        lane_id: Option<i64>,
        meters_per_pixel: Option<f64>,
    ) -> Self {
        let px = |meters: f64| match meters_per_pixel {
            Some(scale) => meters / scale,
            None => UNAVAILABLE,
        };

        NormalizedRecord {
            frame_num,
            car_id,
            car_center_x: px(center[0]),
            car_center_y: px(center[1]),
            bounding_box_1x: px(corners[0][0]),
            bounding_box_1y: px(corners[0][1]),
            bounding_box_2x: px(corners[1][0]),
            bounding_box_2y: px(corners[1][1]),
            bounding_box_3x: px(corners[2][0]),
            bounding_box_3y: px(corners[2][1]),
            bounding_box_4x: px(corners[3][0]),
            bounding_box_4y: px(corners[3][1]),
            car_center_xm: center[0],
            car_center_ym: center[1],
            bounding_box_1xm: corners[0][0],
            bounding_box_1ym: corners[0][1],
            bounding_box_2xm: corners[1][0],
            bounding_box_2ym: corners[1][1],
            bounding_box_3xm: corners[2][0],
            bounding_box_3ym: corners[2][1],
            bounding_box_4xm: corners[3][0],
            bounding_box_4ym: corners[3][1],
            heading,
            course: UNAVAILABLE,
            speed,
            obj_class,
            car_center_lon: UNAVAILABLE,
            car_center_lat: UNAVAILABLE,
            lane_id,
        }
    }
}
