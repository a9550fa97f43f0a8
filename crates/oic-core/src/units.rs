// oic-core/src/units.rs

use uom::si::f64::{
    AngularVelocity as UomAngularVelocity, MassDensity as UomMassDensity,
    MassRate as UomMassRate, Power as UomPower, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type AngularVelocity = UomAngularVelocity;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

/// Scalar conversions between the engineering units users type in
/// (°C, bar, kW, cm³, rev/min, m³/h) and SI.
pub mod convert {
    use super::*;

    pub fn celsius_to_kelvin(c: f64) -> f64 {
        use uom::si::thermodynamic_temperature::kelvin;
        degc(c).get::<kelvin>()
    }

    pub fn kelvin_to_celsius(t_k: f64) -> f64 {
        use uom::si::thermodynamic_temperature::degree_celsius;
        k(t_k).get::<degree_celsius>()
    }

    pub fn bar_to_pa(p_bar: f64) -> f64 {
        use uom::si::pressure::pascal;
        bar(p_bar).get::<pascal>()
    }

    pub fn pa_to_bar(p_pa: f64) -> f64 {
        use uom::si::pressure::bar;
        pa(p_pa).get::<bar>()
    }

    pub fn kw_to_w(p_kw: f64) -> f64 {
        use uom::si::power::watt;
        kw(p_kw).get::<watt>()
    }

    pub fn w_to_kw(p_w: f64) -> f64 {
        use uom::si::power::kilowatt;
        w(p_w).get::<kilowatt>()
    }

    pub fn cm3_to_m3(v_cm3: f64) -> f64 {
        use uom::si::volume::{cubic_centimeter, cubic_meter};
        Volume::new::<cubic_centimeter>(v_cm3).get::<cubic_meter>()
    }

    /// Revolutions per minute to revolutions per second.
    pub fn rpm_to_rps(rpm: f64) -> f64 {
        use uom::si::angular_velocity::{revolution_per_minute, revolution_per_second};
        AngularVelocity::new::<revolution_per_minute>(rpm).get::<revolution_per_second>()
    }

    pub fn m3h_to_m3s(v_m3h: f64) -> f64 {
        use uom::si::volume_rate::{cubic_meter_per_hour, cubic_meter_per_second};
        VolumeRate::new::<cubic_meter_per_hour>(v_m3h).get::<cubic_meter_per_second>()
    }

    pub fn m3s_to_m3h(v_m3s: f64) -> f64 {
        use uom::si::volume_rate::cubic_meter_per_hour;
        m3ps(v_m3s).get::<cubic_meter_per_hour>()
    }
}
