use super::*;

#[test]
fn mine_endpoint_trims_trailing_slash() {
    assert_eq!(mine_endpoint("http://127.0.0.1:8000/"), "http://127.0.0.1:8000/api/cars/mine/");
    assert_eq!(mine_endpoint("http://127.0.0.1:8000"), "http://127.0.0.1:8000/api/cars/mine/");
}

#[test]
fn car_endpoint_formats_id() {
    assert_eq!(car_endpoint("http://h:1", CarId(12)), "http://h:1/api/cars/12/");
}

#[test]
fn bearer_header_value_prefixes_scheme() {
    assert_eq!(bearer_header_value("t0k"), "Bearer t0k");
}
