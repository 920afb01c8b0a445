#[cfg(test)]
mod verify {
    use wxreport::groups::*;
    use wxreport::language::*;
    use wxreport::parsing::{parse, parse_extended, ReportError, ReportKind};

    #[test]
    fn routine_metar_observation() {
        let result = parse("METAR KABQ 092052Z 23004KT 10SM FEW080 29/07 A3005 RMK AO2");
        assert_eq!(result.kind, ReportKind::Metar);
        assert_eq!(result.error, None);
        assert_eq!(result.groups.len(), 10);

        assert_eq!(result.groups[0], Group::Keyword(Keyword::Metar));
        assert_eq!(result.groups[1], Group::Station(Station("KABQ")));

        let Group::IssueTime(time) = &result.groups[2] else {
            panic!("expected the issue time");
        };
        assert_eq!(time.0.day, Some(9));
        assert_eq!(time.0.hour, 20);
        assert_eq!(time.0.minute, 52);

        let Group::Wind(wind) = &result.groups[3] else {
            panic!("expected the surface wind");
        };
        assert_eq!(wind.direction, Direction::Degrees(230));
        assert_eq!(wind.speed.value, Some(4));
        assert_eq!(wind.speed.unit, SpeedUnit::Knots);

        let Group::Visibility(visibility) = &result.groups[4] else {
            panic!("expected the visibility");
        };
        assert_eq!(visibility.visibility.integer, Some(10));
        assert_eq!(visibility.visibility.unit, DistanceUnit::StatuteMiles);

        let Group::Cloud(cloud) = &result.groups[5] else {
            panic!("expected the cloud layer");
        };
        assert_eq!(cloud.amount, CloudAmount::Few);
        assert_eq!(cloud.height().integer, Some(8000));

        let Group::Temperature(temperature) = &result.groups[6] else {
            panic!("expected the temperature");
        };
        assert_eq!(temperature.air.degrees, Some(29));
        assert_eq!(temperature.dew_point.degrees, Some(7));

        let Group::Pressure(pressure) = &result.groups[7] else {
            panic!("expected the altimeter");
        };
        assert_eq!(pressure.pressure.value, Some(30.05));
        assert_eq!(pressure.pressure.unit, PressureUnit::InchesHg);

        assert_eq!(result.groups[8], Group::Keyword(Keyword::Rmk));
        assert_eq!(result.groups[9], Group::Keyword(Keyword::Ao2));
    }

    #[test]
    fn taf_with_trailing_trend() {
        let result =
            parse("TAF BGTL 060900Z 0609/0715 VRB06KT 8000 -SHRASN OVC003 BECMG 0614/0615");
        assert_eq!(result.kind, ReportKind::Taf);
        assert_eq!(result.error, None);
        assert_eq!(result.groups.len(), 9);

        // The validity span right after the issue time
        let Group::Trend(validity) = &result.groups[3] else {
            panic!("expected the validity span");
        };
        assert!(validity.is_time_span());

        let Group::Weather(weather) = &result.groups[6] else {
            panic!("expected the weather group");
        };
        assert_eq!(weather.qualifier, WeatherQualifier::Light);
        assert_eq!(weather.descriptor, WeatherDescriptor::Showers);
        assert_eq!(weather.phenomena, vec![Phenomenon::Rain, Phenomenon::Snow]);

        // BECMG and its time span collapse into one trend group
        let Group::Trend(becmg) = &result.groups[8] else {
            panic!("expected the becoming trend");
        };
        assert_eq!(becmg.trend_type, TrendType::Becmg);
        assert_eq!(
            becmg.from,
            Some(TimePoint {
                day: Some(6),
                hour: 14,
                minute: 0
            })
        );
        assert_eq!(
            becmg.till,
            Some(TimePoint {
                day: Some(6),
                hour: 15,
                minute: 0
            })
        );
        assert!(becmg.is_valid());
    }

    #[test]
    fn colour_code_with_black_flag() {
        let result = parse("METAR EGYD 281050Z 11015KT 5000 M04/M05 Q1020 BLACKGRN");
        assert_eq!(result.kind, ReportKind::Metar);
        assert_eq!(result.error, None);

        let Some(Group::ColourCode(colour)) = result.groups.last() else {
            panic!("expected the colour code last");
        };
        assert_eq!(colour.code, ColourCode::Green);
        assert!(colour.black);

        let Group::Temperature(temperature) = &result.groups[5] else {
            panic!("expected the temperature");
        };
        assert_eq!(temperature.air.degrees, Some(-4));
        assert!(temperature.air.freezing);
    }

    #[test]
    fn empty_report() {
        let result = parse("");
        assert_eq!(result.kind, ReportKind::Unknown);
        assert_eq!(result.error, Some(ReportError::EmptyReport));
        assert!(result.groups.is_empty());

        let blank = parse("   \t \n ");
        assert_eq!(blank.error, Some(ReportError::EmptyReport));
    }

    #[test]
    fn groups_after_nil_are_rejected() {
        let result = parse("METAR KXYZ 092052Z NIL 23004KT");
        assert_eq!(result.error, Some(ReportError::UnexpectedGroupAfterNil));
        // Everything up to and including NIL is retained
        assert_eq!(result.groups.len(), 4);
        assert_eq!(result.groups[3], Group::Keyword(Keyword::Nil));
    }

    #[test]
    fn mixed_visibility_spans_two_tokens() {
        let result = parse("METAR KXYZ 092052Z 1 1/2SM");
        assert_eq!(result.error, None);
        assert_eq!(result.groups.len(), 4);

        let Some(Group::Visibility(visibility)) = result.groups.last() else {
            panic!("expected the mixed visibility");
        };
        assert_eq!(visibility.visibility.integer, Some(1));
        assert_eq!(visibility.visibility.numerator, Some(1));
        assert_eq!(visibility.visibility.denominator, Some(2));
        assert_eq!(
            visibility.visibility.to_unit(DistanceUnit::StatuteMiles),
            Some(1.5)
        );
    }

    #[test]
    fn variable_wind_sector_folds_into_wind() {
        let result = parse("METAR KXYZ 092052Z 31015G27KT 280V350");
        assert_eq!(result.error, None);
        let Some(Group::Wind(wind)) = result.groups.last() else {
            panic!("expected the wind group");
        };
        assert!(wind.has_variable_sector());
        assert_eq!(wind.sector_begin, Direction::Degrees(280));
        assert_eq!(wind.sector_end, Direction::Degrees(350));
    }

    #[test]
    fn low_level_wind_shear_assemblies() {
        let all = parse("METAR KXYZ 092052Z WS ALL RWY");
        assert_eq!(all.error, None);
        let Some(Group::WindShear(shear)) = all.groups.last() else {
            panic!("expected the wind shear group");
        };
        assert!(shear.runway.is_all_runways());
        assert!(shear.is_valid());
        assert_eq!(all.groups.len(), 4);

        let single = parse("METAR KXYZ 092052Z WS R22C");
        let Some(Group::WindShear(shear)) = single.groups.last() else {
            panic!("expected the wind shear group");
        };
        assert_eq!(shear.runway.number, 22);
        assert_eq!(shear.runway.designator, RunwayDesignator::Center);
    }

    #[test]
    fn headerless_report_disambiguates_to_metar() {
        // No METAR/TAF word: the body shape decides, and the deciding
        // token is re-parsed in the body section
        let result = parse("KABQ 092052Z 23004KT 10SM");
        assert_eq!(result.kind, ReportKind::Metar);
        assert_eq!(result.error, None);
        assert_eq!(result.groups.len(), 4);
        let Group::Wind(wind) = &result.groups[2] else {
            panic!("expected the wind group after the reparse");
        };
        assert_eq!(wind.speed.value, Some(4));
    }

    #[test]
    fn headerless_report_disambiguates_to_taf() {
        let result = parse("BGTL 060900Z 0609/0715 VRB06KT");
        assert_eq!(result.kind, ReportKind::Taf);
        assert_eq!(result.error, None);
    }

    #[test]
    fn speci_is_a_metar() {
        let result = parse("SPECI KABQ 092120Z 23012KT 10SM SKC 30/06 A3002");
        assert_eq!(result.kind, ReportKind::Metar);
        assert_eq!(result.error, None);
        assert_eq!(result.groups[0], Group::Keyword(Keyword::Speci));
    }

    #[test]
    fn correction_and_amendment_headers() {
        let cor = parse("METAR COR KABQ 092052Z 23004KT");
        assert_eq!(cor.error, None);
        assert_eq!(cor.groups[1], Group::Keyword(Keyword::Cor));

        let amd = parse("TAF AMD BGTL 060900Z 0609/0715 VRB06KT");
        assert_eq!(amd.error, None);
        assert_eq!(amd.groups[1], Group::Keyword(Keyword::Amd));

        let bad = parse("METAR AMD KABQ 092052Z 23004KT");
        assert_eq!(bad.error, Some(ReportError::AmdAllowedInTafOnly));
    }

    #[test]
    fn cancelled_taf() {
        let result = parse("TAF BGTL 060900Z 0609/0715 CNL");
        assert_eq!(result.error, None);
        assert_eq!(result.groups.last(), Some(&Group::Keyword(Keyword::Cnl)));

        let metar = parse("METAR KABQ 092052Z CNL");
        assert_eq!(metar.error, Some(ReportError::CnlAllowedInTafOnly));
    }

    #[test]
    fn maintenance_indicator_in_metar_remarks() {
        let result = parse("METAR KABQ 092052Z 23004KT RMK AO2 $");
        assert_eq!(result.error, None);
        assert_eq!(
            result.groups.last(),
            Some(&Group::Keyword(Keyword::Maintenance))
        );

        let trailing = parse("METAR KABQ 092052Z 23004KT RMK $ AO2");
        assert_eq!(
            trailing.error,
            Some(ReportError::UnexpectedGroupAfterMaintenanceIndicator)
        );

        let taf = parse("TAF BGTL 060900Z 0609/0715 VRB06KT RMK $");
        assert_eq!(
            taf.error,
            Some(ReportError::MaintenanceIndicatorAllowedInMetarOnly)
        );
    }

    #[test]
    fn truncated_header_errors() {
        let result = parse("METAR KABQ");
        assert_eq!(result.error, Some(ReportError::UnexpectedReportEnd));
        assert_eq!(result.groups.len(), 2);

        let first_token = parse("12345");
        assert_eq!(
            first_token.error,
            Some(ReportError::ExpectedReportTypeOrLocation)
        );
    }

    #[test]
    fn runway_state_and_visual_range() {
        let result = parse("METAR UKLL 092052Z 23004KT 1200 R31/1000V1500U R31/450595");
        assert_eq!(result.error, None);

        let Group::VisualRange(range) = &result.groups[5] else {
            panic!("expected the visual range");
        };
        assert!(range.is_variable());
        assert_eq!(range.min_visual_range().integer, Some(1000));
        assert_eq!(range.max_visual_range().integer, Some(1500));

        let Group::RunwayState(state) = &result.groups[6] else {
            panic!("expected the runway state");
        };
        assert_eq!(state.deposits, Deposits::DrySnow);
        assert_eq!(state.extent, Extent::From26To50Percent);
        assert_eq!(state.friction.braking_action(), BrakingAction::Good);
    }

    #[test]
    fn remarks_recognize_pressure_groups() {
        let result = parse("METAR KABQ 092052Z 23004KT RMK AO2 SLP982 QFE761/1015");
        assert_eq!(result.error, None);

        let Group::Pressure(slp) = &result.groups[6] else {
            panic!("expected the sea level pressure remark");
        };
        assert_eq!(slp.kind, PressureKind::ObservedQnh);
        assert!((slp.pressure.value.unwrap() - 998.2).abs() < 1e-9);

        let Group::Pressure(qfe) = &result.groups[7] else {
            panic!("expected the QFE remark");
        };
        assert_eq!(qfe.kind, PressureKind::ObservedQfe);
        assert_eq!(qfe.pressure.unit, PressureUnit::MmHg);
    }

    #[test]
    fn sea_surface_and_rainfall_in_body() {
        let result = parse("METAR YSSY 092052Z 23004KT 9999 W17/H23 RF02.7/010.5");
        assert_eq!(result.error, None);

        let Group::SeaSurface(sea) = &result.groups[5] else {
            panic!("expected the sea surface group");
        };
        assert_eq!(sea.temperature.degrees, Some(17));
        assert_eq!(sea.waves.wave_height(), Some(2.3));

        let Group::Rainfall(rainfall) = &result.groups[6] else {
            panic!("expected the rainfall group");
        };
        assert_eq!(rainfall.last_10_minutes.amount(), Some(2.7));
        assert_eq!(rainfall.since_9am.amount(), Some(10.5));
    }

    #[test]
    fn nil_and_cnl_appear_at_most_once_in_well_formed_reports() {
        for report in [
            "METAR KABQ 092052Z 23004KT 10SM FEW080 29/07 A3005 RMK AO2",
            "TAF BGTL 060900Z 0609/0715 VRB06KT 8000 -SHRASN OVC003",
            "METAR KXYZ 092052Z NIL",
            "TAF BGTL 060900Z 0609/0715 CNL",
        ] {
            let result = parse(report);
            let specials = result
                .groups
                .iter()
                .filter(|group| {
                    matches!(
                        group,
                        Group::Keyword(Keyword::Nil) | Group::Keyword(Keyword::Cnl)
                    )
                })
                .count();
            assert!(specials <= 1, "{}", report);
        }
    }

    #[test]
    fn extended_mode_keeps_sections_and_sources() {
        let result = parse_extended("METAR KABQ 092052Z 23004KT RMK AO2");
        assert_eq!(result.error, None);
        let sources: Vec<&str> = result
            .groups
            .iter()
            .map(|entry| entry.source.as_str())
            .collect();
        assert_eq!(
            sources,
            vec!["METAR", "KABQ", "092052Z", "23004KT", "RMK", "AO2"]
        );
        assert_eq!(result.groups[5].part, ReportPart::Remarks);
    }

    #[test]
    fn extended_mode_joins_combined_sources() {
        let result = parse_extended("METAR KXYZ 092052Z WS ALL RWY");
        let last = result.groups.last().unwrap();
        assert_eq!(last.source, "WS ALL RWY");
        assert!(matches!(last.group, Group::WindShear(_)));
    }

    #[test]
    fn error_reports_keep_accumulated_groups() {
        // Even though the walk stops, everything accepted so far is kept
        let result = parse("METAR KABQ 092052Z NIL XXXX YYYY");
        assert_eq!(result.error, Some(ReportError::UnexpectedGroupAfterNil));
        assert_eq!(result.groups.len(), 4);
    }

    #[test]
    fn cavok_and_auto() {
        let result = parse("METAR LPMA 092052Z AUTO 23004KT CAVOK 22/18 Q1019");
        assert_eq!(result.error, None);
        assert_eq!(result.groups[3], Group::Keyword(Keyword::Auto));
        assert_eq!(result.groups[5], Group::Keyword(Keyword::Cavok));
    }
}
