// Endpoint and header names fixed by the SENS SMS API.
pub const SENS_BASE_URL: &str = "https://sens.apigw.ntruss.com";

pub(crate) const HEADER_ACCESS_KEY: &str = "x-ncp-iam-access-key";
pub(crate) const HEADER_TIMESTAMP: &str = "x-ncp-apigw-timestamp";
pub(crate) const HEADER_SIGNATURE: &str = "x-ncp-apigw-signature-v2";

pub(crate) const DEFAULT_COUNTRY_CODE: &str = "82";

// Env values used by the service auth loader.
pub const NCP_SMS_SENDER_PHONE: &str = "NCP_SMS_SENDER_PHONE";
pub const NCP_SMS_SERVICE_ID: &str = "NCP_SMS_SERVICE_ID";
