//! Request body for the quickchart.io watermark endpoint.

use serde::Serialize;

/// Where the mark is placed on the main image.
const WATERMARK_POSITION: &str = "bottomMiddle";

/// JSON payload sent to the watermark service. Only the two URLs vary;
/// opacity, size ratio, position and offsets are fixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatermarkPayload<'a> {
    pub main_image_url: &'a str,
    pub mark_image_url: &'a str,
    pub opacity: f64,
    pub mark_ratio: f64,
    pub position: &'static str,
    pub position_x: f64,
    pub position_y: f64,
}

impl<'a> WatermarkPayload<'a> {
    pub fn new(main_image_url: &'a str, mark_image_url: &'a str) -> Self {
        Self {
            main_image_url,
            mark_image_url,
            opacity: 1.0,
            mark_ratio: 1.0,
            position: WATERMARK_POSITION,
            position_x: 0.0,
            position_y: 0.0,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_camel_case_keys_and_fixed_style() {
        let payload = WatermarkPayload::new("https://a.test/img.png", "https://a.test/mark.png");
        let v: serde_json::Value = serde_json::from_slice(&payload.to_json().unwrap()).unwrap();
        assert_eq!(v["mainImageUrl"], "https://a.test/img.png");
        assert_eq!(v["markImageUrl"], "https://a.test/mark.png");
        assert_eq!(v["opacity"], 1.0);
        assert_eq!(v["markRatio"], 1.0);
        assert_eq!(v["position"], "bottomMiddle");
        assert_eq!(v["positionX"], 0.0);
        assert_eq!(v["positionY"], 0.0);
        assert_eq!(v.as_object().unwrap().len(), 7);
    }
}
