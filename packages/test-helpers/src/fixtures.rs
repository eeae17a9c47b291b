//! Sample `stats?mode=everything` reports as served by opentracker.

/// A report with every element present and a distinct value in each counter.
///
/// It has three renew entries (two of them with the same interval) and two
/// http error entries.
pub const FULL_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<stats>
  <tracker_id>1804289383</tracker_id>
  <version>opentracker.c v1.142</version>
  <uptime>12345</uptime>
  <torrents>
    <count_mutex>7</count_mutex>
    <count_iterator>9</count_iterator>
  </torrents>
  <peers>
    <count>120</count>
  </peers>
  <seeds>
    <count>80</count>
  </seeds>
  <completed>
    <count>31</count>
  </completed>
  <connections>
    <tcp>
      <accept>1001</accept>
      <announce>1002</announce>
      <scrape>1003</scrape>
    </tcp>
    <udp>
      <overall>2001</overall>
      <connect>2002</connect>
      <announce>2003</announce>
      <scrape>2004</scrape>
      <missmatch>2005</missmatch>
    </udp>
    <livesync>
      <count>3001</count>
    </livesync>
  </connections>
  <debug>
    <renew>
      <count interval="00001800">11</count>
      <count interval="00000030">12</count>
      <count interval="00001800">13</count>
    </renew>
    <http_error>
      <count code="302 Redirect">21</count>
      <count code="404 Not Found">22</count>
    </http_error>
    <mutex_stall>
      <count>4</count>
    </mutex_stall>
  </debug>
</stats>
"#;

/// The smallest report used in the documentation: an uptime, a torrent count
/// and a single renew entry.
pub const EXAMPLE_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<stats>
  <uptime>12345</uptime>
  <torrents>
    <count_mutex>7</count_mutex>
  </torrents>
  <debug>
    <renew>
      <count interval="1800">42</count>
    </renew>
  </debug>
</stats>
"#;

/// A body that is not a well-formed report.
pub const MALFORMED_REPORT: &str = "<stats><uptime>12345</torrents></stats>";

/// The connection counters of [`FULL_REPORT`] with the `udp` section before
/// the `tcp` one and the children of both in a different order.
pub const SHUFFLED_CONNECTIONS_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<stats>
  <connections>
    <livesync>
      <count>3001</count>
    </livesync>
    <udp>
      <missmatch>2005</missmatch>
      <scrape>2004</scrape>
      <connect>2002</connect>
      <overall>2001</overall>
      <announce>2003</announce>
    </udp>
    <tcp>
      <scrape>1003</scrape>
      <accept>1001</accept>
      <announce>1002</announce>
    </tcp>
  </connections>
  <uptime>12345</uptime>
</stats>
"#;
