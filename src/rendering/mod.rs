//! Human-readable explanations of decoded groups.

use crate::groups::*;
use crate::language::*;
use crate::parsing::{ReportError, ReportKind};

pub fn report_kind_text(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Unknown => "unable to detect report type",
        ReportKind::Metar => "METAR (weather observation)",
        ReportKind::Taf => "TAF (weather forecast)",
    }
}

pub fn report_error_text(error: Option<ReportError>) -> String {
    match error {
        None => "no error".to_string(),
        Some(error) => error.to_string(),
    }
}

/// Explain one decoded group as one or more lines of prose.
pub fn explain_group(group: &Group) -> String {
    let mut text = match group {
        Group::Text(g) => format!("unrecognized group: {}", g.0),
        Group::Keyword(keyword) => explain_keyword(*keyword).to_string(),
        Group::Station(g) => format!("ICAO code of the station: {}", g.0),
        Group::IssueTime(g) => format!("issued at {}", explain_time(&g.0)),
        Group::Trend(g) => explain_trend(g),
        Group::Wind(g) => explain_wind(g),
        Group::Visibility(g) => explain_visibility(g),
        Group::Cloud(g) => explain_cloud(g),
        Group::Weather(g) => explain_weather(g),
        Group::Temperature(g) => explain_temperature_group(g),
        Group::TemperatureForecast(g) => explain_temperature_forecast(g),
        Group::Pressure(g) => explain_pressure_group(g),
        Group::VisualRange(g) => explain_visual_range(g),
        Group::RunwayState(g) => explain_runway_state(g),
        Group::WindShear(g) => explain_wind_shear(g),
        Group::Rainfall(g) => explain_rainfall(g),
        Group::SeaSurface(g) => explain_sea_surface(g),
        Group::ColourCode(g) => explain_colour_code(g),
    };
    if !group.is_valid() {
        text.push_str("\n(data not consistent)");
    }
    text
}

fn explain_keyword(keyword: Keyword) -> &'static str {
    match keyword {
        Keyword::Metar => "report type: METAR (weather observation)",
        Keyword::Speci => "report type: SPECI (unscheduled observation)",
        Keyword::Taf => "report type: TAF (weather forecast)",
        Keyword::Amd => "amended report",
        Keyword::Nil => "missing report",
        Keyword::Cnl => "cancelled report",
        Keyword::Cor => "correctional report",
        Keyword::Auto => "fully automated report, no human intervention",
        Keyword::Snoclo => "aerodrome closed due to snow accumulation",
        Keyword::Cavok => {
            "ceiling and visibility OK: visibility 10 km or more in all directions, \
             no cloud below 5000 feet, no cumulonimbus, no significant weather"
        }
        Keyword::Nsw => "no significant weather: previously reported weather ended",
        Keyword::Rmk => "remarks follow",
        Keyword::Wsconds => "potential wind shear conditions",
        Keyword::Maintenance => "automated station requires maintenance",
        Keyword::Ao1 => "automated station without a precipitation discriminator",
        Keyword::Ao2 => "automated station with a precipitation discriminator",
        Keyword::Nospeci => "no SPECI reports are issued at this location",
        Keyword::Presfr => "pressure falling rapidly",
        Keyword::Presrr => "pressure rising rapidly",
        Keyword::Rvrno => "runway visual range is not available",
        Keyword::Pwino => "present weather identifier is not operating",
        Keyword::Pno => "precipitation amount gauge is not operating",
        Keyword::Fzrano => "freezing rain sensor is not operating",
        Keyword::Tsno => "lightning detection system is not operating",
        Keyword::Slpno => "sea level pressure is not available",
    }
}

fn explain_trend(trend: &TrendGroup) -> String {
    let mut lines: Vec<String> = Vec::new();
    match trend.trend_type {
        TrendType::None => lines.push("incomplete trend group".to_string()),
        TrendType::Nosig => lines.push("no significant weather changes expected".to_string()),
        TrendType::Becmg => lines.push("conditions gradually becoming".to_string()),
        TrendType::Tempo => lines.push("temporary conditions (less than 60 minutes)".to_string()),
        TrendType::Inter => lines.push("intermittent conditions (less than 30 minutes)".to_string()),
        TrendType::From => lines.push("conditions change rapidly from".to_string()),
        TrendType::TimeSpan => lines.push("conditions during the period".to_string()),
    }
    match trend.probability {
        Probability::None => {}
        Probability::Prob30 => lines.push("probability 30%".to_string()),
        Probability::Prob40 => lines.push("probability 40%".to_string()),
    }
    if let Some(from) = &trend.from {
        lines.push(format!("from {}", explain_time(from)));
    }
    if let Some(till) = &trend.till {
        lines.push(format!("until {}", explain_time(till)));
    }
    if let Some(at) = &trend.at {
        lines.push(format!("at {}", explain_time(at)));
    }
    lines.join("\n")
}

fn explain_wind(wind: &WindGroup) -> String {
    if wind.is_calm() {
        return "calm wind (no wind)".to_string();
    }
    let mut lines: Vec<String> = Vec::new();
    if wind.is_wind_shear() {
        lines.push(format!(
            "wind shear at {}",
            explain_distance(&wind.shear_height)
        ));
    }
    if wind.direction != Direction::Omitted || wind.speed.value.is_some() {
        lines.push(format!(
            "wind direction: {}",
            explain_direction(&wind.direction, true)
        ));
        lines.push(format!("wind speed: {}", explain_speed(&wind.speed)));
        if wind.gust.value.is_some() {
            lines.push(format!("gust speed: {}", explain_speed(&wind.gust)));
        }
    }
    if wind.has_variable_sector() {
        lines.push(format!(
            "variable between {} and {}",
            explain_direction(&wind.sector_begin, true),
            explain_direction(&wind.sector_end, true)
        ));
    }
    lines.join("\n")
}

fn explain_visibility(visibility: &VisibilityGroup) -> String {
    let mut text = if visibility.is_prevailing() {
        "prevailing visibility: ".to_string()
    } else {
        format!(
            "visibility toward {}: ",
            explain_direction(&visibility.direction, false)
        )
    };
    text.push_str(&explain_distance(&visibility.visibility));
    text
}

fn explain_cloud(cloud: &CloudGroup) -> String {
    let amount = match cloud.amount {
        CloudAmount::NotReported => "cloud amount not reported",
        CloudAmount::Ncd => "no clouds detected",
        CloudAmount::Nsc => "no significant clouds",
        CloudAmount::Clear => "no clouds detected below 12000 feet",
        CloudAmount::SkyClear => "sky clear",
        CloudAmount::Few => "few clouds (1/8 to 2/8 of the sky)",
        CloudAmount::Scattered => "scattered clouds (3/8 to 4/8 of the sky)",
        CloudAmount::Broken => "broken clouds (5/8 to 7/8 of the sky)",
        CloudAmount::Overcast => "overcast (8/8 of the sky)",
        CloudAmount::Obscured => "sky obscured",
    };
    let mut lines = vec![amount.to_string()];
    if cloud.is_vertical_visibility() {
        lines.push(format!(
            "vertical visibility: {}",
            explain_distance(&cloud.vertical_visibility())
        ));
    } else if cloud.is_cloud_layer() || cloud.amount == CloudAmount::NotReported {
        lines.push(format!("base height: {}", explain_distance(&cloud.height())));
    }
    match cloud.convective {
        ConvectiveType::None => {}
        ConvectiveType::NotReported => lines.push("convective type not reported".to_string()),
        ConvectiveType::ToweringCumulus => lines.push("towering cumulus".to_string()),
        ConvectiveType::Cumulonimbus => lines.push("cumulonimbus".to_string()),
    }
    lines.join("\n")
}

fn explain_weather(weather: &WeatherGroup) -> String {
    let mut words: Vec<&'static str> = Vec::new();
    match weather.qualifier {
        WeatherQualifier::None => {}
        WeatherQualifier::Recent => words.push("recent"),
        WeatherQualifier::Vicinity => words.push("in the vicinity"),
        WeatherQualifier::Light => words.push("light"),
        WeatherQualifier::Moderate => words.push("moderate"),
        WeatherQualifier::Heavy => words.push("heavy"),
    }
    match weather.descriptor {
        WeatherDescriptor::None => {}
        WeatherDescriptor::Shallow => words.push("shallow"),
        WeatherDescriptor::Partial => words.push("partial"),
        WeatherDescriptor::Patches => words.push("patches of"),
        WeatherDescriptor::LowDrifting => words.push("low drifting"),
        WeatherDescriptor::Blowing => words.push("blowing"),
        WeatherDescriptor::Showers => words.push("showers of"),
        WeatherDescriptor::Thunderstorm => words.push("thunderstorm"),
        WeatherDescriptor::Freezing => words.push("freezing"),
    }
    for phenomenon in &weather.phenomena {
        words.push(match phenomenon {
            Phenomenon::NotReported => "weather phenomena not reported",
            Phenomenon::Drizzle => "drizzle",
            Phenomenon::Rain => "rain",
            Phenomenon::Snow => "snow",
            Phenomenon::SnowGrains => "snow grains",
            Phenomenon::IceCrystals => "ice crystals",
            Phenomenon::IcePellets => "ice pellets",
            Phenomenon::Hail => "hail",
            Phenomenon::SmallHail => "small hail",
            Phenomenon::Undetermined => "undetermined precipitation",
            Phenomenon::Mist => "mist",
            Phenomenon::Fog => "fog",
            Phenomenon::Smoke => "smoke",
            Phenomenon::VolcanicAsh => "volcanic ash",
            Phenomenon::Dust => "widespread dust",
            Phenomenon::Sand => "sand",
            Phenomenon::Haze => "haze",
            Phenomenon::Spray => "spray",
            Phenomenon::DustWhirls => "dust or sand whirls",
            Phenomenon::Squalls => "squalls",
            Phenomenon::FunnelCloud => "funnel cloud",
            Phenomenon::Sandstorm => "sandstorm",
            Phenomenon::Duststorm => "duststorm",
        });
    }
    format!("weather: {}", words.join(" "))
}

fn explain_temperature_group(group: &TemperatureGroup) -> String {
    let mut lines = vec![
        format!("air temperature: {}", explain_temperature(&group.air)),
        format!("dew point: {}", explain_temperature(&group.dew_point)),
    ];
    if let Some(rh) = group.relative_humidity() {
        lines.push(format!("relative humidity: {:.0}%", rh));
    }
    lines.join("\n")
}

fn explain_temperature_forecast(group: &TemperatureForecastGroup) -> String {
    let point = match group.point {
        ForecastPoint::Minimum => "minimum",
        ForecastPoint::Maximum => "maximum",
    };
    format!(
        "{} temperature {} expected at {}",
        point,
        explain_temperature(&group.temperature),
        explain_time(&group.time)
    )
}

fn explain_pressure_group(group: &PressureGroup) -> String {
    let kind = match group.kind {
        PressureKind::ObservedQnh => "atmospheric pressure (normalized to sea level)",
        PressureKind::ForecastLowestQnh => "forecast lowest sea level pressure",
        PressureKind::ObservedQfe => "pressure at aerodrome elevation",
    };
    format!("{}: {}", kind, explain_pressure(&group.pressure))
}

fn explain_visual_range(group: &VisualRangeGroup) -> String {
    let mut lines = vec![format!("runway {}", explain_runway(&group.runway))];
    if group.is_variable() {
        lines.push(format!(
            "visual range varying from {} to {}",
            explain_distance(&group.min_visual_range()),
            explain_distance(&group.max_visual_range())
        ));
    } else {
        lines.push(format!(
            "visual range: {}",
            explain_distance(&group.visual_range())
        ));
    }
    match group.trend {
        VisualRangeTrend::None => {}
        VisualRangeTrend::NotReported => lines.push("trend not reported".to_string()),
        VisualRangeTrend::Upward => lines.push("trend: improving".to_string()),
        VisualRangeTrend::Neutral => lines.push("trend: unchanged".to_string()),
        VisualRangeTrend::Downward => lines.push("trend: deteriorating".to_string()),
    }
    lines.join("\n")
}

fn explain_runway_state(group: &RunwayStateGroup) -> String {
    let mut lines = vec![format!("state of runway {}", explain_runway(&group.runway))];
    match group.status {
        RunwayStateStatus::SnowClosed => {
            lines.push("closed due to snow accumulation".to_string());
            return lines.join("\n");
        }
        RunwayStateStatus::Cleared => {
            lines.push("deposits on the runway were cleared or ceased to exist".to_string());
        }
        RunwayStateStatus::Normal => {
            lines.push(format!("deposits: {}", explain_deposits(group.deposits)));
            lines.push(format!("extent: {}", explain_extent(group.extent)));
            lines.push(format!(
                "deposit depth: {}",
                explain_precipitation(&group.depth)
            ));
        }
    }
    lines.push(format!(
        "surface friction: {}",
        explain_friction(&group.friction)
    ));
    lines.join("\n")
}

fn explain_wind_shear(group: &WindShearGroup) -> String {
    if !group.is_valid() {
        return "incomplete low-level wind shear group".to_string();
    }
    if group.runway.is_all_runways() {
        return "low-level wind shear along all runways".to_string();
    }
    format!(
        "low-level wind shear along runway {}",
        explain_runway(&group.runway)
    )
}

fn explain_rainfall(group: &RainfallGroup) -> String {
    let mut lines = vec![
        format!(
            "rainfall in the last 10 minutes: {}",
            explain_precipitation(&group.last_10_minutes)
        ),
        format!(
            "rainfall since 09:00 local: {}",
            explain_precipitation(&group.since_9am)
        ),
    ];
    if group.last_60_minutes.status != PrecipitationStatus::NotReported {
        lines.push(format!(
            "rainfall in the last 60 minutes: {}",
            explain_precipitation(&group.last_60_minutes)
        ));
    }
    lines.join("\n")
}

fn explain_sea_surface(group: &SeaSurfaceGroup) -> String {
    let state = match group.waves.state_of_surface() {
        StateOfSurface::NotReported => "not reported",
        StateOfSurface::CalmGlassy => "calm (glassy)",
        StateOfSurface::CalmRippled => "calm (rippled)",
        StateOfSurface::Smooth => "smooth",
        StateOfSurface::Slight => "slight",
        StateOfSurface::Moderate => "moderate",
        StateOfSurface::Rough => "rough",
        StateOfSurface::VeryRough => "very rough",
        StateOfSurface::High => "high",
        StateOfSurface::VeryHigh => "very high",
        StateOfSurface::Phenomenal => "phenomenal",
    };
    let mut lines = vec![format!(
        "sea surface temperature: {}",
        explain_temperature(&group.temperature)
    )];
    match group.waves.kind {
        WaveHeightKind::StateOfSurface => lines.push(format!("state of sea surface: {}", state)),
        WaveHeightKind::WaveHeight => match group.waves.wave_height() {
            Some(height) => lines.push(format!("wave height: {:.1} m ({})", height, state)),
            None => lines.push("wave height not reported".to_string()),
        },
    }
    lines.join("\n")
}

fn explain_colour_code(group: &ColourCodeGroup) -> String {
    let code = match group.code {
        ColourCode::Blue => "BLUE: visibility above 8000 m, lowest broken cloud above 2500 ft",
        ColourCode::White => "WHITE: visibility above 5000 m, lowest broken cloud above 1500 ft",
        ColourCode::Green => "GREEN: visibility above 3700 m, lowest broken cloud above 700 ft",
        ColourCode::Yellow1 => "YELLOW1: visibility above 2500 m, lowest broken cloud above 500 ft",
        ColourCode::Yellow2 => "YELLOW2: visibility above 1600 m, lowest broken cloud above 300 ft",
        ColourCode::Amber => "AMBER: visibility above 800 m, lowest broken cloud above 200 ft",
        ColourCode::Red => "RED: visibility below 800 m or broken cloud below 200 ft",
    };
    if group.black {
        return format!("colour code {}\naerodrome closed for non-weather reasons", code);
    }
    format!("colour code {}", code)
}

fn explain_time(time: &TimePoint) -> String {
    match time.day {
        Some(day) => format!("day {}, {:02}:{:02} GMT", day, time.hour, time.minute),
        None => format!("{:02}:{:02} GMT", time.hour, time.minute),
    }
}

fn explain_runway(runway: &Runway) -> String {
    if runway.is_all_runways() {
        return "all runways".to_string();
    }
    if runway.is_message_repetition() {
        return "repetition of the last message".to_string();
    }
    let designator = match runway.designator {
        RunwayDesignator::None => "",
        RunwayDesignator::Left => " LEFT",
        RunwayDesignator::Center => " CENTER",
        RunwayDesignator::Right => " RIGHT",
    };
    format!("{:02}{}", runway.number, designator)
}

fn explain_temperature(temperature: &Temperature) -> String {
    let celsius = match temperature.to_unit(TemperatureUnit::Celsius) {
        None => return "not reported".to_string(),
        Some(value) => value,
    };
    let mut text = format!("{:.0} °C", celsius);
    if let Some(fahrenheit) = temperature.to_unit(TemperatureUnit::Fahrenheit) {
        text.push_str(&format!(" ({:.1} °F)", fahrenheit));
    }
    if celsius == 0.0 {
        text.push_str(if temperature.freezing {
            ", slightly below freezing"
        } else {
            ", slightly above freezing"
        });
    }
    text
}

fn explain_speed(speed: &Speed) -> String {
    let value = match speed.value {
        None => return "not reported".to_string(),
        Some(value) => value,
    };
    let unit = match speed.unit {
        SpeedUnit::Knots => "knots",
        SpeedUnit::MetersPerSecond => "m/s",
        SpeedUnit::KilometersPerHour => "km/h",
        SpeedUnit::MilesPerHour => "mph",
    };
    let mut text = format!("{} {}", value, unit);
    if speed.unit != SpeedUnit::Knots {
        if let Some(knots) = speed.to_unit(SpeedUnit::Knots) {
            text.push_str(&format!(" ({:.1} knots)", knots));
        }
    }
    text
}

fn explain_distance(distance: &Distance) -> String {
    if !distance.is_reported() {
        return "not reported".to_string();
    }
    let modifier = match distance.modifier {
        DistanceModifier::None => "",
        DistanceModifier::LessThan => "less than ",
        DistanceModifier::MoreThan => "more than ",
    };
    let mut value = String::new();
    if let Some(integer) = distance.integer {
        value.push_str(&integer.to_string());
    }
    if distance.has_fraction() {
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(&format!(
            "{}/{}",
            distance.numerator.unwrap_or(0),
            distance.denominator.unwrap_or(1)
        ));
    }
    let unit = match distance.unit {
        DistanceUnit::Meters => "m",
        DistanceUnit::StatuteMiles => "statute miles",
        DistanceUnit::Feet => "ft",
    };
    format!("{}{} {}", modifier, value, unit)
}

fn explain_direction(direction: &Direction, true_directions: bool) -> String {
    match direction {
        Direction::Omitted => "omitted".to_string(),
        Direction::NotReported => "not reported".to_string(),
        Direction::Variable => "variable".to_string(),
        Direction::NoDirectionalVariation => "no directional variation".to_string(),
        Direction::Degrees(degrees) | Direction::CardinalPoint(degrees) => {
            let cardinal = match direction.cardinal(true_directions) {
                Cardinal::None => "",
                Cardinal::Ndv => "no directional variation",
                Cardinal::N => "north",
                Cardinal::S => "south",
                Cardinal::W => "west",
                Cardinal::E => "east",
                Cardinal::Nw => "northwest",
                Cardinal::Ne => "northeast",
                Cardinal::Sw => "southwest",
                Cardinal::Se => "southeast",
                Cardinal::TrueN => "true north",
                Cardinal::TrueW => "true west",
                Cardinal::TrueS => "true south",
                Cardinal::TrueE => "true east",
            };
            format!("{}° ({})", degrees, cardinal)
        }
    }
}

fn explain_pressure(pressure: &Pressure) -> String {
    let value = match pressure.value {
        None => return "not reported".to_string(),
        Some(value) => value,
    };
    match pressure.unit {
        PressureUnit::Hectopascal => format!("{:.1} hPa", value),
        PressureUnit::InchesHg => format!("{:.2} inHg", value),
        PressureUnit::MmHg => format!("{:.0} mmHg", value),
    }
}

fn explain_precipitation(precipitation: &Precipitation) -> String {
    match precipitation.status {
        PrecipitationStatus::NotReported => "not reported".to_string(),
        PrecipitationStatus::RunwayNotOperational => "runway not operational".to_string(),
        PrecipitationStatus::Reported => {
            format!("{:.1} mm", precipitation.millimeters)
        }
    }
}

fn explain_friction(friction: &SurfaceFriction) -> String {
    match friction.status {
        FrictionStatus::NotReported => "not reported".to_string(),
        FrictionStatus::Unreliable => "unreliable or unmeasurable".to_string(),
        FrictionStatus::CoefficientReported => match friction.coefficient() {
            Some(coefficient) => format!("coefficient {:.2}", coefficient),
            None => "not reported".to_string(),
        },
        FrictionStatus::BrakingActionReported => {
            let action = match friction.braking_action() {
                BrakingAction::None => "not reported",
                BrakingAction::Poor => "poor",
                BrakingAction::MediumPoor => "medium to poor",
                BrakingAction::Medium => "medium",
                BrakingAction::MediumGood => "medium to good",
                BrakingAction::Good => "good",
            };
            format!("braking action {}", action)
        }
    }
}

fn explain_deposits(deposits: Deposits) -> &'static str {
    match deposits {
        Deposits::ClearAndDry => "clear and dry",
        Deposits::Damp => "damp",
        Deposits::WetAndWaterPatches => "wet with water patches",
        Deposits::RimeAndFrostCovered => "rime and frost covered",
        Deposits::DrySnow => "dry snow",
        Deposits::WetSnow => "wet snow",
        Deposits::Slush => "slush",
        Deposits::Ice => "ice",
        Deposits::CompactedOrRolledSnow => "compacted or rolled snow",
        Deposits::FrozenRutsOrRidges => "frozen ruts or ridges",
        Deposits::NotReported => "not reported",
    }
}

fn explain_extent(extent: Extent) -> &'static str {
    match extent {
        Extent::None => "none",
        Extent::LessThan10Percent => "less than 10% of the runway",
        Extent::From11To25Percent => "11% to 25% of the runway",
        Extent::From26To50Percent => "26% to 50% of the runway",
        Extent::MoreThan51Percent => "more than 51% of the runway",
        Extent::NotReported => "not reported",
        Extent::Reserved3
        | Extent::Reserved4
        | Extent::Reserved6
        | Extent::Reserved7
        | Extent::Reserved8 => "reserved value",
    }
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::parsing::parse;

    fn explain_last(report: &str) -> String {
        let result = parse(report);
        explain_group(result.groups.last().expect("at least one group"))
    }

    #[test]
    fn wind_explanations() {
        let text = explain_last("METAR KABQ 092052Z 23004KT");
        assert!(text.contains("230"));
        assert!(text.contains("4 knots"));

        let calm = explain_last("METAR KABQ 092052Z 00000KT");
        assert!(calm.contains("calm"));
    }

    #[test]
    fn variable_visual_range_reads_both_ends() {
        let text = explain_last("METAR KABQ 092052Z R06/0600V1200N");
        assert!(text.contains("600"));
        assert!(text.contains("1200"));
    }

    #[test]
    fn rainfall_fields_stay_distinct() {
        let text = explain_last("METAR YSSY 092052Z RF02.7/010.5/001.3");
        assert!(text.contains("10 minutes: 2.7 mm"));
        assert!(text.contains("since 09:00 local: 10.5 mm"));
        assert!(text.contains("60 minutes: 1.3 mm"));
    }

    #[test]
    fn invalid_groups_are_flagged() {
        let text = explain_last("METAR KABQ 092052Z 23015G15KT");
        assert!(text.contains("not consistent"));
    }

    #[test]
    fn freezing_zero_wording() {
        let text = explain_last("METAR KABQ 092052Z M00/M04");
        assert!(text.contains("slightly below freezing"));
    }
}
