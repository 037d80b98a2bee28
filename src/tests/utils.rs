use crate::assets::Banner;
use crate::data::loader::read_dataset;
use crate::data::Dataset;
use crate::domain::FilterState;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Three listings: two in A (house and unit), one house in B.
pub const SCENARIO_CSV: &str = "\
Suburb,CouncilArea,Address,Price,Type,Rooms,Landsize,BuildingArea
A,Alpha Council,1 First St,500000,h,3,300,120
A,Alpha Council,2 Second St,300000,u,2,,65
B,Beta Council,\"3 Third St, Rear\",900000,h,4,450,
";

/// A bigger fixture, columns shuffled and padded, with a few rows the
/// loader has to throw away.
pub const MIXED_CSV: &str = "\
Suburb,Address,Rooms,Type,Price,Method,CouncilArea,Landsize,BuildingArea
Abbotsford,85 Turner St,2,h,1480000,S,Yarra City Council,202,
Abbotsford,25 Bloomburg St,2,h,1035000,S,Yarra City Council,156,79
Abbotsford,5 Charles St,3,h,1465000,SP,Yarra City Council,134,150
Abbotsford,40 Federation La,3,h,,PI,Yarra City Council,94,
Airport West,154 Halsey Rd,3,t,840000,PI,Moonee Valley City Council,303,225
Airport West,50 Bedford St,3,h,not listed,S,Moonee Valley City Council,586,
Albert Park,85 Richardson St,2,h,1275000,S,Port Phillip City Council,120,82
Albert Park,18 Mills St,2,u,955000,S,Port Phillip City Council,0,
Albert Park,,4,h,2850000,S,Port Phillip City Council,245,210
Alphington,6 Smith St,4.0,h,2000000,S,Darebin City Council,unknown,
Alphington,2/9 Yarralea St,1,u,530000,S,Darebin City Council,0,
,7 Nowhere St,3,h,700000,S,,200,
Brunswick,11 Nowhere St,,h,700000,S,Moreland City Council,200,
Brunswick,12 Nowhere St,3,,700000,S,Moreland City Council,200,
Brunswick,13 Nowhere St,2.5,h,700000,S,Moreland City Council,200,
";

pub fn dataset_from_csv(csv: &str) -> Dataset {
    read_dataset(csv.as_bytes()).unwrap_or_else(|e| panic!("fixture failed to load: {e}"))
}

pub fn scenario_dataset() -> Dataset {
    dataset_from_csv(SCENARIO_CSV)
}

pub fn filter_state(suburbs: &[&str], types: &[&str], min_rooms: i64) -> FilterState {
    FilterState {
        page: Default::default(),
        suburbs: suburbs.iter().map(|s| s.to_string()).collect(),
        types: types.iter().map(|s| s.to_string()).collect(),
        min_rooms,
    }
}

pub fn test_app(dataset: Dataset) -> AppState {
    let banner = Banner::from_bytes(
        br#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#.to_vec(),
        mime::IMAGE_SVG,
    );
    AppState::new(dataset, banner)
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// GET `uri` and expect the handler to succeed.
pub fn get(app: &AppState, uri: &str) -> Response {
    handle(request(Method::GET, uri), app).expect("Handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
