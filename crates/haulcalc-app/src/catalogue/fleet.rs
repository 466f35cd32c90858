use haulcalc_types::MethodMode;

use super::{ids, FieldSpec, MethodSpec};
use crate::reports::{fleet, summary};

const fn vehicles(label: &'static str) -> FieldSpec {
    FieldSpec::number("vehicles", label).min(1.0).step(1.0)
}

const EMPTY_RETURN_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payload", "Грузоподъёмность автомобиля, т (q)"),
    FieldSpec::ratio("loadFactor", "Коэффициент использования грузоподъёмности (γ)").default(0.9),
    FieldSpec::number("dutyTime", "Время в наряде, ч (Tн)").default(10.0),
    FieldSpec::number("loadUnloadTime", "Время на погрузку и выгрузку, ч (tпв)")
        .step(0.01)
        .default(0.2),
    FieldSpec::number(
        "singleOperationTime",
        "Время одной операции (погрузка или выгрузка), ч (tп)",
    )
    .step(0.01)
    .default(0.1),
    FieldSpec::number("loadedDistance", "Гружёный пробег, км (lг)").default(16.0),
    FieldSpec::number("zeroRun1", "Первый нулевой пробег, км (lн1)").default(7.0),
    FieldSpec::number("zeroRun2", "Второй нулевой пробег, км (lн2)").default(11.0),
    FieldSpec::number("emptyDistance", "Холостой пробег, км (lх)").default(16.0),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость, км/ч (Vт)").default(25.0),
];

const PARTIAL_LOADED_RETURN_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payload", "Грузоподъёмность автомобиля, т (q)").default(10.0),
    FieldSpec::number("dutyTime", "Плановое время в наряде, ч (Tн)").default(10.0),
    FieldSpec::number("loadUnloadTime", "Время на погрузку‑выгрузку, ч (tпв)")
        .step(0.01)
        .default(0.4),
    FieldSpec::number(
        "loadedDistance1",
        "Расстояние перевозки в прямом направлении, км (lг₁)",
    )
    .default(16.0),
    FieldSpec::number(
        "loadedDistance2",
        "Гружёный участок обратного направления, км (lг₂)",
    )
    .default(10.0),
    FieldSpec::number("zeroRun1", "Первый нулевой пробег, км (lн₁)").default(13.0),
    FieldSpec::number("zeroRun2", "Второй нулевой пробег, км (lн₂)").default(8.0),
    FieldSpec::number("zeroRun3", "Третий нулевой пробег, км (lн₃)").default(6.0),
    FieldSpec::number("emptyDistance2", "Холостой пробег, км (lх₂)").default(5.0),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость, км/ч (Vт)").default(25.0),
    FieldSpec::ratio("loadFactor", "Коэффициент использования грузоподъёмности (γ)").default(1.0),
];

const LOADED_RETURN_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payload", "Грузоподъёмность автомобиля, т (q)").default(10.0),
    FieldSpec::ratio("loadFactor", "Коэффициент использования грузоподъёмности (γ)").default(0.9),
    FieldSpec::number("dutyTime", "Время в наряде, ч (Tн)").default(10.0),
    FieldSpec::number("loadUnloadTime", "Время на погрузку‑выгрузку, ч (tпв)")
        .step(0.01)
        .default(0.2),
    FieldSpec::number(
        "singleOperationTime",
        "Время одной операции (погрузка или выгрузка), ч (tп)",
    )
    .step(0.01)
    .default(0.1),
    FieldSpec::number(
        "loadedDistance1",
        "Гружёный пробег в прямом направлении, км (lг₁)",
    )
    .default(16.0),
    FieldSpec::number(
        "loadedDistance2",
        "Гружёный пробег в обратном направлении, км (lг₂)",
    )
    .default(16.0),
    FieldSpec::number("zeroRun1", "Первый нулевой пробег, км (lн₁)").default(12.0),
    FieldSpec::number("zeroRun2", "Второй нулевой пробег, км (lн₂)").default(9.0),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость, км/ч (Vт)").default(27.0),
];

const RING_ROUTE_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payload", "Грузоподъёмность, т (q)").default(10.0),
    FieldSpec::ratio("loadFactor", "Коэф. статического использования (γ)").default(0.9),
    FieldSpec::number("dutyTime", "Плановое время в наряде, ч (Tн)").default(8.0),
    FieldSpec::number("loadUnloadTime", "Время на погрузку-выгрузку на ездку, ч (tпв)")
        .step(0.01)
        .default(0.2),
    FieldSpec::number("loadedDistance1", "Первый гружёный пробег, км (lг₁)").default(16.0),
    FieldSpec::number("loadedDistance2", "Второй гружёный пробег, км (lг₂)").default(7.0),
    FieldSpec::number("zeroRun1", "Первый нулевой пробег, км (lн₁)").default(7.0),
    FieldSpec::number("zeroRun2", "Второй нулевой пробег, км (lн₂)").default(11.0),
    FieldSpec::number("zeroRun3", "Третий нулевой пробег, км (lн₃)").default(8.0),
    FieldSpec::number("emptyDistance1", "Первый холостой пробег, км (lх₁)").default(8.0),
    FieldSpec::number("emptyDistance2", "Второй холостой пробег, км (lх₂)").default(8.0),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость, км/ч (Vт)").default(25.0),
    FieldSpec::number("singleOperationTime", "Максимальная операция (Rmax), ч (tп = tв)")
        .step(0.01)
        .default(0.25),
];

const SHIFT_BALANCE_FIELDS: &[FieldSpec] = &[
    vehicles("Количество автомобилей в группе, шт"),
    FieldSpec::number("avgTrips", "Среднее число ездок на автомобиль, шт"),
    FieldSpec::number("avgPayload", "Средняя масса груза за ездку, т"),
    FieldSpec::number("routeLength", "Длина маршрута, км"),
];

const UTILIZATION_FIELDS: &[FieldSpec] = &[
    vehicles("Автомобилей в парке, шт"),
    FieldSpec::number("shiftDuration", "Длительность смены, ч"),
    FieldSpec::number("prepTime", "Подготовительно-заключительное время, ч"),
    FieldSpec::number("downtime", "Плановые простои, ч"),
    FieldSpec::number("workingTime", "Фактическое время работы, ч"),
];

const MULTI_ROUTE_FIELDS: &[FieldSpec] = &[
    vehicles("Число автомобилей, шт"),
    FieldSpec::number("payloadA", "Средний груз на плече A, т"),
    FieldSpec::number("payloadB", "Средний груз на плече B, т"),
    FieldSpec::number("distanceA", "Длина плеча A, км"),
    FieldSpec::number("distanceB", "Длина плеча B, км"),
];

const TIME_BALANCE_FIELDS: &[FieldSpec] = &[
    vehicles("Количество машин, шт"),
    FieldSpec::number("drivingTime", "Время в движении, ч"),
    FieldSpec::number("serviceTime", "Время погрузки/разгрузки, ч"),
    FieldSpec::number("idleTime", "Простой организационный, ч"),
];

const CAPACITY_FIELDS: &[FieldSpec] = &[
    vehicles("Количество машин, шт"),
    FieldSpec::number("payloadCapacity", "Грузоподъёмность одной машины, т"),
    FieldSpec::number("turnaroundTime", "Время оборота, ч"),
    FieldSpec::number("shiftDuration", "Длительность смены, ч"),
    FieldSpec::ratio("loadFactor", "Коэффициент использования грузоподъёмности"),
];

pub static FLEET_METHODS: &[MethodSpec] = &[
    MethodSpec {
        id: ids::FLEET_PENDULUM_EMPTY_RETURN,
        name: "Методика расчета показателей работы группы автомобилей на маятниковом маршруте с обратным не груженым пробегом",
        description: "Расчёт показателей работы группы автомобилей на маятниковом маршруте с обратным не груженым пробегом.",
        mode: MethodMode::Fleet,
        inputs: EMPTY_RETURN_FIELDS,
        calculate: fleet::pendulum_empty_return,
    },
    MethodSpec {
        id: ids::FLEET_PENDULUM_PARTIAL_LOADED_RETURN,
        name: "Методика расчета показателей работы группы автомобилей на маятниковом маршруте с обратным гружёным пробегом не на всем расстоянии перевозок (γ₁ = γ₂)",
        description: "Оценивает работу группы на маятниковом маршруте с частично гружёным обратным пробегом при равных коэффициентах загрузки.",
        mode: MethodMode::Fleet,
        inputs: PARTIAL_LOADED_RETURN_FIELDS,
        calculate: fleet::pendulum_partial_loaded_return,
    },
    MethodSpec {
        id: ids::FLEET_PENDULUM_LOADED_RETURN,
        name: "Методика расчёта показателей работы группы автомобилей на маятниковом маршруте с обратным гружёным пробегом",
        description: "Расчёт групповой работы на маятниковом маршруте с гружёным обратным пробегом и двумя вариантами подачи в пункты погрузки.",
        mode: MethodMode::Fleet,
        inputs: LOADED_RETURN_FIELDS,
        calculate: fleet::pendulum_loaded_return,
    },
    MethodSpec {
        id: ids::FLEET_RING_ROUTE,
        name: "Методика расчёта показателей работы группы автомобилей на кольцевом маршруте",
        description: "Кольцевой маршрут с двумя погрузочными пунктами, учёт пропускной способности и дополнительных ездок при остатке времени.",
        mode: MethodMode::Fleet,
        inputs: RING_ROUTE_FIELDS,
        calculate: fleet::ring_route_report,
    },
    MethodSpec {
        id: ids::FLEET_SHIFT_BALANCE,
        name: "Групповое сменное задание",
        description: "Рассчитывает суммарные показатели группы автомобилей по средним параметрам смены.",
        mode: MethodMode::Fleet,
        inputs: SHIFT_BALANCE_FIELDS,
        calculate: summary::shift_balance_report,
    },
    MethodSpec {
        id: ids::FLEET_UTILIZATION,
        name: "Использование парка по времени",
        description: "Оценка использования сменного фонда автомобилей с учётом простоев и подготовительного времени.",
        mode: MethodMode::Fleet,
        inputs: UTILIZATION_FIELDS,
        calculate: summary::utilization_report,
    },
    MethodSpec {
        id: ids::FLEET_MULTI_ROUTE,
        name: "Групповая работа на нескольких плечах",
        description: "Балансирует объём перевозок между двумя плечами для одной группы автомобилей.",
        mode: MethodMode::Fleet,
        inputs: MULTI_ROUTE_FIELDS,
        calculate: summary::multi_route_report,
    },
    MethodSpec {
        id: ids::FLEET_TIME_BALANCE,
        name: "Баланс времени группы",
        description: "Определяет структуру использования времени по типам операций для автоколонны.",
        mode: MethodMode::Fleet,
        inputs: TIME_BALANCE_FIELDS,
        calculate: summary::time_balance_report,
    },
    MethodSpec {
        id: ids::FLEET_CAPACITY,
        name: "Пропускная способность автоколонны",
        description: "Оценивает потенциальный суточный объём перевозок группы при заданной грузоподъёмности.",
        mode: MethodMode::Fleet,
        inputs: CAPACITY_FIELDS,
        calculate: summary::capacity_report,
    },
];
