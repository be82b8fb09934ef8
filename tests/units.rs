use docxside_template::{
    EMUS_PER_INCH, Emu, Error, Point, SizeEmu, Twip, UnitValue, points_to_emus, twips_to_emus,
};

#[test]
fn one_inch_of_twips_is_exact() {
    assert_eq!(twips_to_emus(Twip::new(1440)), Emu::new(EMUS_PER_INCH));
    assert_eq!(twips_to_emus(Twip::new(0)), Emu::new(0));
}

#[test]
fn twips_to_emus_matches_reference_values() {
    let cases = [
        (1, 635),
        (20, 12700),
        (720, 457200),
        (1134, 720090),
        (9360, 5943600),
        (11909, 7562215),
        (12240, 7772400),
        (16834, 10689590),
    ];
    for (twips, emus) in cases {
        assert_eq!(twips_to_emus(Twip::new(twips)).emus(), emus, "twips={twips}");
    }
}

#[test]
fn twips_to_emus_truncates_single_precision_result() {
    // 7 twips is 4445 EMU exactly, but the f32 intermediates land just below.
    assert_eq!(twips_to_emus(Twip::new(7)).emus(), 4444);
}

#[test]
fn points_to_emus_truncates_toward_zero() {
    assert_eq!(points_to_emus(Point::new(72.0)), Emu::new(914_400));
    assert_eq!(points_to_emus(Point::new(1.0)).emus(), 12700);
    assert_eq!(points_to_emus(Point::new(0.5)).emus(), 6350);
    // 0.0001pt is 1.27 EMU
    assert_eq!(points_to_emus(Point::new(0.0001)).emus(), 1);
    assert_eq!(points_to_emus(Point::new(-0.0001)).emus(), -1);
}

#[test]
fn conversion_methods_delegate() {
    assert_eq!(Twip::new(2880).to_emus(), twips_to_emus(Twip::new(2880)));
    assert_eq!(Point::new(10.5).to_emus(), points_to_emus(Point::new(10.5)));
}

#[test]
fn twip_from_float_truncates() {
    assert_eq!(Twip::from_f64_truncated(1439.9).twips(), 1439);
    assert_eq!(Twip::from_f64_truncated(-20.7).twips(), -20);
}

#[test]
fn rendering_units_as_text_fails() {
    let twip = Twip::new(1440).render_text();
    let point = Point::new(12.0).render_text();
    let emu = Emu::new(914_400).render_text();

    assert!(matches!(twip, Err(Error::UnitNotRenderable { unit: "Twip", .. })));
    assert!(matches!(point, Err(Error::UnitNotRenderable { unit: "Point", .. })));
    assert!(matches!(emu, Err(Error::UnitNotRenderable { unit: "Emu", .. })));

    let message = Emu::new(1).render_text().unwrap_err().to_string();
    assert!(message.contains("can't convert Emu directly to text"), "{message}");
}

#[test]
fn debug_output_keeps_unit_tag() {
    assert_eq!(format!("{:?}", Twip::new(1440)), "Twip(1440)");
    assert_eq!(format!("{:?}", Emu::new(635)), "Emu(635)");
}

#[test]
fn size_emu_pairs_width_and_height() {
    let size = SizeEmu::from_raw(914_400, 457_200);
    assert_eq!(size, SizeEmu::new(Emu::new(914_400), Emu::new(457_200)));
    assert_eq!(size.width.emus(), 914_400);
    assert_eq!(size.height.emus(), 457_200);
}
